use anyhow::{anyhow, Result};
use reqwest::Url;

pub fn validate_catalogue_url(value: &str) -> Result<()> {
    let url = Url::parse(value).map_err(|err| anyhow!("invalid catalogue_api_url: {}", err))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(anyhow!(
            "catalogue_api_url must use http or https, got '{}'",
            url.scheme()
        ));
    }
    Ok(())
}
