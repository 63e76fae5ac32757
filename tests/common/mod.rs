#![allow(dead_code)]

use letterdraw::catalog::{parse, Catalog, Record};
use letterdraw::selector::IndexSource;

/// Small catalog covering every flag column and both casings.
pub const SAMPLE_CSV: &str = "\
name,local_image_path,wiki_url,OutsidePelican,Perfection-locked,mastery-locked,Mineral
Apple,apple.png,https://wiki/Apple,no,no,no,no
Amethyst,amethyst.png,https://wiki/Amethyst,no,no,no,yes
Ancient Fruit,ancient.png,https://wiki/Ancient_Fruit,no,yes,no,no
avocado,avocado.png,https://wiki/Avocado,no,no,yes,no
Banana,banana.png,https://wiki/Banana,yes,no,no,no
Blueberry,blueberry.png,https://wiki/Blueberry,no,no,no,no
\"Xenon, Raw\",xenon.png,https://wiki/Xenon,no,no,no,no
Lava Eel,lava_eel.png,https://wiki/Lava_Eel,no,no,no,no
Leek,leek.png,https://wiki/Leek,no,no,no,no
Lingcod,lingcod.png,https://wiki/Lingcod,no,no,no,no
";

pub fn sample_catalog() -> Catalog {
    parse(SAMPLE_CSV)
}

pub fn names<'a, I: IntoIterator<Item = &'a Record>>(records: I) -> Vec<String> {
    records
        .into_iter()
        .map(|r| r.get("name").unwrap_or_default().to_string())
        .collect()
}

/// Always returns the same index.
pub struct FixedIndex(pub usize);

impl IndexSource for FixedIndex {
    fn pick_index(&mut self, _len: usize) -> usize {
        self.0
    }
}

/// Walks through 0, 1, 2, ... wrapping at the pool size.
pub struct Cycle(pub usize);

impl IndexSource for Cycle {
    fn pick_index(&mut self, len: usize) -> usize {
        let idx = self.0 % len;
        self.0 += 1;
        idx
    }
}
