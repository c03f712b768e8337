use communes_backend::api::dtos::CreateMunicipalityRequest;
use communes_backend::domain::Municipality;

pub fn municipality(code: &str, name: &str, latitude: f64, longitude: f64) -> Municipality {
    Municipality {
        code: code.to_string(),
        name: name.to_string(),
        postal_code: format!("{}000", &code[..2]),
        latitude,
        longitude,
    }
}

pub fn paris() -> Municipality {
    municipality("75056", "Paris", 48.8566, 2.3522)
}

/// Paris plus a ring of neighbours at known distances from it.
///
/// | code  | name                 | km from Paris |
/// |-------|----------------------|---------------|
/// | 94080 | Vincennes            | 6             |
/// | 92012 | Boulogne-Billancourt | 8             |
/// | 93066 | Saint-Denis          | 9             |
/// | 95127 | Cergy                | 28            |
/// | 69123 | Lyon                 | 391           |
pub fn ile_de_france() -> Vec<Municipality> {
    vec![
        paris(),
        municipality("94080", "Vincennes", 48.8474, 2.4390),
        municipality("92012", "Boulogne-Billancourt", 48.8397, 2.2399),
        municipality("93066", "Saint-Denis", 48.9362, 2.3574),
        municipality("95127", "Cergy", 49.0364, 2.0761),
        municipality("69123", "Lyon", 45.7640, 4.8357),
    ]
}

pub fn create_request(code: &str, name: &str) -> CreateMunicipalityRequest {
    CreateMunicipalityRequest {
        code: code.to_string(),
        name: name.to_string(),
        postal_code: "75001".to_string(),
        latitude: 48.8566,
        longitude: 2.3522,
    }
}
