use crate::format::Location;
use crate::format::problem::*;

pub fn create_prospect(id: &str, lat: f64, lng: f64) -> Prospect {
    Prospect {
        id: id.to_string(),
        name: format!("prospect {id}"),
        address: String::default(),
        phone: String::default(),
        email: String::default(),
        location: Location::new(lat, lng),
        status: Status::default(),
        category: Category::default(),
    }
}

pub fn create_empty_problem() -> Problem {
    Problem { reference: None, prospects: vec![], selection: None }
}

/// Returns a problem with reference in downtown Curitiba and three prospects around it.
pub fn create_test_problem() -> Problem {
    Problem {
        reference: Some(Location::new(-25.4284, -49.2733)),
        prospects: vec![
            create_prospect("A", -25.32019, -49.05904),
            Prospect { status: Status::Negotiating, ..create_prospect("B", -25.49121, -49.14888) },
            Prospect {
                phone: "(41) 3555-3669".to_string(),
                category: Category::Qualified,
                ..create_prospect("C", -25.436947, -49.247364)
            },
        ],
        selection: None,
    }
}
