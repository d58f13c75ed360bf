use serde::{Deserialize, Serialize};

/// Static business description for Maljut Pizzas.
///
/// Hours and contact are literal placeholders until the business
/// confirms them; they are served as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessInfo {
    pub nombre: String,
    pub tipo: String,
    pub servicios: Vec<String>,
    pub horarios: String,
    pub contacto: String,
}

/// Basic information about the business
pub fn basic_info() -> BusinessInfo {
    BusinessInfo {
        nombre: "Maljut Pizzas".to_string(),
        tipo: "Pizzería".to_string(),
        servicios: vec![
            "Delivery".to_string(),
            "Take away".to_string(),
            "Comer en local".to_string(),
        ],
        horarios: "Por confirmar".to_string(),
        contacto: "Por confirmar".to_string(),
    }
}
