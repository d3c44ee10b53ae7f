//! Seed content loaded into a fresh store.

use crate::domain::destination::NewDestination;

#[allow(clippy::too_many_arguments)]
fn destination(
    name: &str,
    country: &str,
    continent: &str,
    photo: &str,
    tag: (&str, &str),
    activities: &str,
    kind: &str,
    description: &str,
) -> NewDestination {
    NewDestination {
        name: name.to_string(),
        country: country.to_string(),
        continent: continent.to_string(),
        image: format!(
            "https://images.unsplash.com/{}?ixlib=rb-4.0.3&ixid=MnwxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8&auto=format&fit=crop&w=800&h=500",
            photo
        ),
        tag: Some(tag.0.to_string()),
        tag_type: Some(tag.1.to_string()),
        activities: Some(activities.to_string()),
        kind: kind.to_string(),
        description: Some(description.to_string()),
    }
}

/// The six catalog destinations, in display order.
pub fn seed_destinations() -> Vec<NewDestination> {
    vec![
        destination(
            "Rio de Janeiro",
            "Brasil",
            "américa do sul",
            "photo-1483729558449-99ef09a8c325",
            ("Popular", "popular"),
            "Praias, Cultura, Diversão",
            "cidade",
            "Rio de Janeiro é uma cidade vibrante conhecida por suas belas praias, o Cristo Redentor e o Carnaval.",
        ),
        destination(
            "Paris",
            "França",
            "europa",
            "photo-1502602898657-3e91760cbb34",
            ("Romântico", "romantic"),
            "Arte, Gastronomia, Arquitetura",
            "cidade",
            "Paris, a Cidade Luz, encanta com a Torre Eiffel, museus de classe mundial e gastronomia requintada.",
        ),
        destination(
            "Tóquio",
            "Japão",
            "ásia",
            "photo-1540959733332-eab4deabeeaf",
            ("Tendência", "trend"),
            "Tecnologia, Culinária, Tradição",
            "cidade",
            "Tóquio é uma metrópole ultramoderna que combina arranha-céus futuristas com templos tradicionais.",
        ),
        destination(
            "Santorini",
            "Grécia",
            "europa",
            "photo-1570077188670-e3a8d69ac5ff",
            ("Romântico", "romantic"),
            "Praias, Vistas, Gastronomia",
            "ilha",
            "Santorini encanta com suas casas brancas, cúpulas azuis e vistas espetaculares do Mar Egeu.",
        ),
        destination(
            "Bali",
            "Indonésia",
            "ásia",
            "photo-1537996194471-e657df975ab4",
            ("Popular", "popular"),
            "Praias, Templos, Natureza",
            "ilha",
            "Bali oferece praias paradisíacas, templos milenares e uma cultura rica em tradições.",
        ),
        destination(
            "Machu Picchu",
            "Peru",
            "américa do sul",
            "photo-1526392060635-9d6019884377",
            ("Aventura", "trend"),
            "Montanhas, História, Aventura",
            "natureza",
            "Machu Picchu, a cidade perdida dos Incas, é um dos mais impressionantes sítios arqueológicos do mundo.",
        ),
    ]
}
