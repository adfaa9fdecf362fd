//! Deterministic seller and product names from curated word lists.
//!
//! Same RNG stream = same names.

use crate::rng::StreamRng;

pub struct NameGenerator;

impl NameGenerator {
    /// (first_name, last_name) for a seller.
    pub fn seller_name(rng: &mut StreamRng) -> (&'static str, &'static str) {
        let first = FIRST_NAMES[rng.pick(FIRST_NAMES.len())];
        let last = LAST_NAMES[rng.pick(LAST_NAMES.len())];
        (first, last)
    }

    /// "Finish Material Item", e.g. "Matte Oak Shelf".
    pub fn product_name(rng: &mut StreamRng) -> String {
        let finish = FINISHES[rng.pick(FINISHES.len())];
        let material = MATERIALS[rng.pick(MATERIALS.len())];
        let item = ITEMS[rng.pick(ITEMS.len())];
        format!("{finish} {material} {item}")
    }
}

const FIRST_NAMES: &[&str] = &[
    "Amelia", "Boris", "Chloe", "Dmitri", "Elena", "Felix", "Greta", "Hugo",
    "Irina", "Jonas", "Katya", "Leon", "Maya", "Nikolai", "Olga", "Pavel",
    "Quinn", "Rosa", "Stefan", "Tamara", "Ulrich", "Vera", "Wanda", "Xavier",
    "Yana", "Zoltan", "Alina", "Bogdan", "Carmen", "Denis", "Eva", "Fedor",
];

const LAST_NAMES: &[&str] = &[
    "Abramov", "Bauer", "Castillo", "Dubois", "Eriksen", "Fischer", "Garcia",
    "Horvat", "Ivanova", "Jansen", "Kowalski", "Larsen", "Moreau", "Novak",
    "Orlov", "Petrov", "Quintero", "Rossi", "Sokolova", "Torres", "Ueda",
    "Volkov", "Weber", "Yilmaz", "Zhukov", "Lindqvist", "Marin", "Nagy",
];

const FINISHES: &[&str] = &[
    "Matte", "Glossy", "Brushed", "Rustic", "Polished", "Classic", "Compact",
    "Deluxe", "Vintage", "Modern",
];

const MATERIALS: &[&str] = &[
    "Oak", "Steel", "Ceramic", "Linen", "Walnut", "Copper", "Glass", "Bamboo",
    "Leather", "Wool",
];

const ITEMS: &[&str] = &[
    "Shelf", "Lamp", "Mug", "Blanket", "Chair", "Vase", "Tray", "Clock",
    "Basket", "Stool", "Kettle", "Frame",
];
