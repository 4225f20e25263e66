//! User-facing message texts.
//!
//! Every string the bot sends is built here, as pure functions over catalog
//! and state data. WhatsApp-style markup: `*bold*`.

use super::catalog::{SiteCatalog, SiteEntry};

/// Welcome message plus the numbered site menu.
pub fn site_menu(catalog: &SiteCatalog) -> String {
    let mut menu = String::from(
        "Olá! 👋 Bem-vindo ao buscador de vagas.\n\
         Escolha uma ou mais opções abaixo digitando os números correspondentes \
         (ex: 1 ou 1,3):\n\n",
    );
    for (index, entry) in catalog.iter().enumerate() {
        menu.push_str(&format!("*{}.* {}\n", index + 1, entry.display_name));
    }
    menu.push_str(&format!(
        "*{}.* TODOS os sites acima",
        catalog.all_option_number()
    ));
    menu
}

/// Re-prompt after an answer with no valid menu number.
pub fn invalid_selection(max_option: usize) -> String {
    format!(
        "Opção inválida. Por favor, digite um número de *1* a *{}*.",
        max_option
    )
}

/// Acknowledges the chosen sites and asks for the job title.
pub fn job_title_prompt(selected: &[SiteEntry]) -> String {
    format!(
        "Ótimo! Você escolheu *{}*.\nAgora, digite o *cargo* que você deseja buscar.",
        selected_names(selected)
    )
}

/// Asks for the location.
pub fn location_prompt() -> String {
    "Perfeito. E qual a *localização*? (Ex: São Paulo, Remoto)".to_string()
}

/// Sent right before the backend call.
pub fn searching_notice() -> String {
    "Aguarde um momento, estou buscando as melhores vagas para você... 👨‍💻".to_string()
}

/// Numbered digest of the results.
pub fn results_digest(job_title: &str, results: &[String]) -> String {
    let mut text = format!(
        "Encontrei {} vaga(s) para *{}*:\n\n",
        results.len(),
        job_title
    );
    for (index, result) in results.iter().enumerate() {
        text.push_str(&format!("{}. {}\n\n", index + 1, result));
    }
    text
}

/// Sent when the backend returns an empty list.
pub fn no_results_notice() -> String {
    "Desculpe, não encontrei nenhuma vaga com esses critérios.".to_string()
}

/// Generic failure notice; backend detail stays in the logs.
pub fn internal_error_notice() -> String {
    "Ocorreu um erro interno ao buscar as vagas. Tente novamente mais tarde.".to_string()
}

/// Acknowledges a cancelled flow.
pub fn cancelled_notice(trigger_keyword: &str) -> String {
    format!(
        "Busca cancelada. Envie *{}* quando quiser começar de novo.",
        trigger_keyword
    )
}

fn selected_names(selected: &[SiteEntry]) -> String {
    selected
        .iter()
        .map(|e| e.display_name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
