//! Natural-language instruction for checklist generation.

use super::request::ChecklistRequest;

/// System instruction for checklist completions.
pub const CHECKLIST_SYSTEM_PROMPT: &str = "Você é um especialista em planejamento de viagens. \
Crie checklists detalhados em português com base nas informações fornecidas.";

/// Required categories with examples, in presentation order.
pub const CHECKLIST_CATEGORIES: [&str; 9] = [
    "Documentos (ex: passaporte, RG, seguro viagem)",
    "Roupas adequadas ao clima (ex: casaco, bermuda, biquíni)",
    "Higiene pessoal (ex: escova de dente, shampoo)",
    "Eletrônicos (ex: carregador, adaptador de tomada, power bank)",
    "Saúde (ex: remédios, protetor solar, repelente)",
    "Específicos por tipo de viagem (ex: roupa social, tênis de trilha, guia turístico)",
    "Transporte (ex: reserva de carro, passagens)",
    "Hotel (ex: confirmação de reserva)",
    "Outros essenciais (cartões, dinheiro, snacks, etc.)",
];

const OUTPUT_SCHEMA: &str = r#"[
  { "id": "1", "text": "Passaporte", "category": "Documentos", "checked": false },
  { "id": "2", "text": "Seguro viagem", "category": "Documentos", "checked": false }
]"#;

/// Builds the user instruction, embedding categories and output schema.
pub fn checklist_instruction(request: &ChecklistRequest) -> String {
    let categories: String = CHECKLIST_CATEGORIES
        .iter()
        .map(|c| format!("- {}\n", c))
        .collect();

    format!(
        "Gere um checklist inteligente de viagem com base nos seguintes parâmetros:\n\
         \n\
         - Destino: {destination}\n\
         - Clima esperado: {climate}\n\
         - Duração da viagem: {duration} dias\n\
         - Tipo de viagem: {trip_type}\n\
         - Itens já confirmados pelo usuário: {confirmed}\n\
         \n\
         O checklist deve ser dividido por categorias:\n\
         {categories}\
         \n\
         Cada categoria deve ter pelo menos 4-5 itens relevantes.\n\
         \n\
         Formate sua resposta como um JSON com a seguinte estrutura:\n\
         {OUTPUT_SCHEMA}\n\
         \n\
         Obs: Os itens que já estão na lista de \"Itens já confirmados pelo usuário\" \
         devem ser marcados como \"checked\": true.",
        destination = request.destination,
        climate = request.climate,
        duration = request.duration,
        trip_type = request.trip_type,
        confirmed = request.confirmed_items.join(", "),
    )
}
