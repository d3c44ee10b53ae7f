//! Natural-language instruction for itinerary generation.

use super::request::ItineraryRequest;

/// System instruction for itinerary completions.
pub const ITINERARY_SYSTEM_PROMPT: &str = "Você é um especialista em planejamento de viagens. \
Crie roteiros detalhados em português com base nas informações fornecidas.";

const OUTPUT_SCHEMA: &str = r#"[
  {
    "date": "Dia 1 - DD/MM/AAAA",
    "title": "Título descritivo para o dia",
    "activities": [
      { "id": "1-1", "time": "09:00 - 12:00", "description": "Descrição da atividade" }
    ],
    "tip": "Dica útil para o dia (opcional)"
  }
]"#;

/// Builds the user instruction, embedding the mandatory output schema.
pub fn itinerary_instruction(request: &ItineraryRequest) -> String {
    let main = request.main_destination();
    let others = if request.other_destinations().is_empty() {
        String::new()
    } else {
        format!(", incluindo visitas a {}", request.other_destinations().join(", "))
    };

    format!(
        "Crie um roteiro detalhado de {duration} dias em {main}{others}.\n\
         Data de início: {start}\n\
         Data de fim: {end}\n\
         Interesses: {interests}\n\
         Preferências: {preferences}\n\
         \n\
         Formato obrigatório:\n\
         - Organize por dias (Dia 1, Dia 2, etc.) com data específica\n\
         - Para cada dia, liste atividades com horários específicos\n\
         - Inclua sugestões de café da manhã, almoço e jantar\n\
         - Mencione pontos turísticos específicos de {main}\n\
         - Adicione dicas úteis quando relevante\n\
         \n\
         Formate sua resposta como um JSON com a seguinte estrutura:\n\
         {OUTPUT_SCHEMA}",
        duration = request.duration_days(),
        start = request.start_date().format("%d/%m/%Y"),
        end = request.end_date().format("%d/%m/%Y"),
        interests = request.interests().join(", "),
        preferences = request.preferences(),
    )
}
