use rand::Rng;

use super::hunter::Hunter;
use super::types::{Item, TerrainKind};

/// The obstacle surrounding a town. Immutable once generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Terrain {
    kind: TerrainKind,
}

impl Terrain {
    pub fn new(kind: TerrainKind) -> Self {
        Terrain { kind }
    }

    /// Pick one of the terrain kinds uniformly.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let idx = rng.gen_range(0..TerrainKind::ALL.len());
        Terrain::new(TerrainKind::ALL[idx])
    }

    pub fn kind(&self) -> TerrainKind {
        self.kind
    }

    pub fn needed_item(&self) -> Item {
        self.kind.required_item()
    }

    pub fn can_cross(&self, hunter: &Hunter) -> bool {
        hunter.has_item(self.needed_item())
    }

    pub fn info_string(&self) -> String {
        format!("The {} needs a {} to cross.", self.kind, self.needed_item())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn generate_reaches_every_kind() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut seen = Vec::new();
        for _ in 0..500 {
            let kind = Terrain::generate(&mut rng).kind();
            if !seen.contains(&kind) {
                seen.push(kind);
            }
        }
        assert_eq!(seen.len(), TerrainKind::ALL.len());
    }

    #[test]
    fn crossing_needs_the_item() {
        let plains = Terrain::new(TerrainKind::Plains);
        let mut h = Hunter::new("ada", 20);
        assert!(!plains.can_cross(&h));
        h.kit_mut().add_item(Item::Horse);
        assert!(plains.can_cross(&h));
        assert_eq!(plains.info_string(), "The Plains needs a horse to cross.");
    }
}
