use crate::entities::Item;
use crate::ports::RandomSource;

/// Picks one item uniformly at random. `None` only when `items` is empty.
pub fn pick_one<'a>(items: &'a [Item], random: &dyn RandomSource) -> Option<&'a Item> {
    if items.is_empty() {
        return None;
    }
    let index = random.next_index(items.len());
    items.get(index % items.len())
}
