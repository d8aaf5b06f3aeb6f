use crate::core::{Model, Record};
use crate::domain::model::FIELD_MAX;
use rand::Rng;

/// Draws a fresh record: model uniform over A/B/C, both numeric fields uniform over 0..=1000.
pub fn generate<R: Rng>(rng: &mut R) -> Record {
    let model = Model::ALL[rng.random_range(0..Model::ALL.len())];
    Record {
        model,
        score: rng.random_range(0..=FIELD_MAX),
        time: rng.random_range(0..=FIELD_MAX),
    }
}
