//! Generate command helpers.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/generate/generate_test.rs"]
mod generate_test;

use leads_pragmatic::format::Location;
use leads_pragmatic::format::problem::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

const KM_PER_DEGREE: f64 = 111.32;
const DEFAULT_AREA_SIZE_KM: f64 = 10.;

const NAME_PREFIXES: &[&str] = &["ACME", "Delta", "Norte", "Prime", "Sul", "Uniao"];
const NAME_SUFFIXES: &[&str] = &["Comercio", "Industria", "Maquinas", "Pecas", "Servicos"];
const STATUSES: &[Status] = &[Status::New, Status::Negotiating, Status::Closed];
const CATEGORIES: &[Category] = &[Category::Potential, Category::Qualified];

/// Generates a pragmatic problem with prospects spread uniformly around `center`.
/// `area_size` is a half side of the bounding box in kilometers, the same `seed` gives the same problem.
pub fn generate_problem(
    center: Location,
    prospects_size: usize,
    area_size: Option<f64>,
    seed: Option<u64>,
) -> Result<Problem, String> {
    if prospects_size == 0 {
        return Err("prospects size should be greater than zero".to_string());
    }

    let area_size = area_size.unwrap_or(DEFAULT_AREA_SIZE_KM);
    if area_size.is_nan() || area_size <= 0. {
        return Err(format!("area size should be positive, got: '{area_size}'"));
    }

    let mut rng = seed.map_or_else(SmallRng::from_entropy, SmallRng::seed_from_u64);
    let ((min_lat, min_lng), (max_lat, max_lng)) = get_bounding_box_from_size(center, area_size);

    let prospects = (1..=prospects_size)
        .map(|idx| {
            let prefix = get_random_item(NAME_PREFIXES, &mut rng).copied().unwrap_or("Prospect");
            let suffix = get_random_item(NAME_SUFFIXES, &mut rng).copied().unwrap_or_default();

            Prospect {
                id: format!("prospect{idx}"),
                name: format!("{prefix} {suffix}").trim().to_string(),
                address: String::default(),
                phone: format!("(41) {:04}-{:04}", rng.gen_range(3000..4000), rng.gen_range(0..10000)),
                email: format!("contact{idx}@example.com"),
                location: Location::new(rng.gen_range(min_lat..=max_lat), rng.gen_range(min_lng..=max_lng)),
                status: get_random_item(STATUSES, &mut rng).copied().unwrap_or_default(),
                category: get_random_item(CATEGORIES, &mut rng).copied().unwrap_or_default(),
            }
        })
        .collect();

    Ok(Problem { reference: Some(center), prospects, selection: None })
}

/// Returns ((min_lat, min_lng), (max_lat, max_lng)) of a box with given half side in kilometers.
fn get_bounding_box_from_size(center: Location, area_size: f64) -> ((f64, f64), (f64, f64)) {
    let lat_offset = area_size / KM_PER_DEGREE;
    let lng_offset = area_size / (KM_PER_DEGREE * center.lat.to_radians().cos().max(1E-6));

    (
        ((center.lat - lat_offset).max(-90.), (center.lng - lng_offset).max(-180.)),
        ((center.lat + lat_offset).min(90.), (center.lng + lng_offset).min(180.)),
    )
}

fn get_random_item<'a, T>(items: &'a [T], rng: &mut SmallRng) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }

    items.get(rng.gen_range(0..items.len()))
}
