use crate::error::MissingKeysError;
use crate::models::{AttributeRecord, CatalogItem, Recommendation};
use rand::Rng;
use rand::seq::IndexedRandom;

/// Static menu of recommended items with their display swatches.
pub const DO_CATALOG: [CatalogItem; 5] = [
    CatalogItem { name: "Fitted Blazer", color: "#2E86C1" },
    CatalogItem { name: "Dark Wash Jeans", color: "#1B2631" },
    CatalogItem { name: "V-Neck Tops", color: "#E74C3C" },
    CatalogItem { name: "Midi Skirts", color: "#F39C12" },
    CatalogItem { name: "Tailored Pants", color: "#27AE60" },
];

/// Static menu of discouraged items.
pub const DONT_CATALOG: [CatalogItem; 5] = [
    CatalogItem { name: "Baggy Clothes", color: "#7F8C8D" },
    CatalogItem { name: "Neon Colors", color: "#39FF14" },
    CatalogItem { name: "Oversized Jackets", color: "#5D6D7E" },
    CatalogItem { name: "High-Low Hem", color: "#922B21" },
    CatalogItem { name: "Low Waist Jeans", color: "#4A235A" },
];

/// How many Do items each recommendation carries, and the cap on Don'ts.
pub const PICK_COUNT: usize = 3;

/// Build a recommendation from a complete attribute record.
///
/// The record must hold all eleven keys; its values do not influence the
/// output. Three distinct Do items are sampled without replacement, then the
/// Don't list is the first three catalog-order items whose names were not
/// picked. The two catalogs share no names, so the Don't list is always full.
pub fn predict(
    record: &AttributeRecord,
    rng: &mut impl Rng,
) -> Result<Recommendation, MissingKeysError> {
    let missing = record.missing_keys();
    if !missing.is_empty() {
        return Err(MissingKeysError(missing));
    }

    let dos: Vec<CatalogItem> = DO_CATALOG
        .choose_multiple(rng, PICK_COUNT)
        .cloned()
        .collect();
    let do_names: Vec<&str> = dos.iter().map(|item| item.name).collect();

    let donts: Vec<CatalogItem> = DONT_CATALOG
        .iter()
        .filter(|item| !do_names.contains(&item.name))
        .take(PICK_COUNT)
        .cloned()
        .collect();

    Ok(Recommendation { dos, donts })
}
