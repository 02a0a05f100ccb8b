use backend_application::queries::home_queries::HomePage;

const HOME_TEMPLATE: &str = include_str!("../templates/index.html");

/// Fills the template in a single scan, so substituted values are never
/// re-read as placeholders.
pub fn render_home(page: &HomePage) -> String {
    let info = &page.system_info;
    let value_of = |name: &str| -> Option<String> {
        match name {
            "version" => Some(escape_html(&page.version)),
            "hostname" => Some(escape_html(&info.hostname)),
            "ip_address" => Some(escape_html(&info.ip_address)),
            "is_container" => Some(yes_no(info.is_container).to_string()),
            "is_orchestrated" => Some(yes_no(info.is_orchestrated).to_string()),
            "year" => Some(page.year.to_string()),
            _ => None,
        }
    };

    let mut html = String::with_capacity(HOME_TEMPLATE.len() + 256);
    let mut rest = HOME_TEMPLATE;
    while let Some(start) = rest.find("{{") {
        html.push_str(&rest[..start]);
        let after_open = &rest[start + 2..];
        let Some(end) = after_open.find("}}") else {
            rest = &rest[start..];
            break;
        };
        match value_of(&after_open[..end]) {
            Some(value) => html.push_str(&value),
            None => html.push_str(&rest[start..start + 2 + end + 2]),
        }
        rest = &after_open[end + 2..];
    }
    html.push_str(rest);
    html
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
