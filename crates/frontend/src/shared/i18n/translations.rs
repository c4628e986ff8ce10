use super::Language;

/// (key, English, Portuguese)
const TABLE: &[(&str, &str, &str)] = &[
    // Header
    ("app_title", "TalkGuest Analytics", "TalkGuest Analytics"),
    ("app_subtitle", "Hospitality Data Processing", "Processamento de Dados de Hotelaria"),
    // Tabs
    ("tab_upload", "Upload & Process", "Carregar e Processar"),
    ("tab_occupancy", "Occupancy", "Ocupação"),
    ("tab_revenue", "Revenue", "Receitas"),
    ("process_data_first", "process data first", "processe os dados primeiro"),
    // Upload
    ("upload_title", "Upload Data Files", "Carregar Ficheiros de Dados"),
    ("clear_all", "Clear All", "Limpar Tudo"),
    ("guests_list", "Guests List", "Lista de Hóspedes"),
    ("reservations", "Reservations", "Reservas"),
    ("invoices_optional", "Invoices (Optional)", "Faturas (Opcional)"),
    (
        "required_files",
        "* Required files. Accepts Excel files (.xlsx, .xls)",
        "* Ficheiros obrigatórios. Aceita ficheiros Excel (.xlsx, .xls)",
    ),
    ("remove", "Remove", "Remover"),
    ("uploading", "Uploading...", "A carregar..."),
    ("drag_drop", "Drag & drop an Excel file here", "Arraste e solte um ficheiro Excel aqui"),
    ("or_click_browse", "or click to browse", "ou clique para procurar"),
    ("drop_here", "Drop the file here", "Solte o ficheiro aqui"),
    ("rows", "rows", "linhas"),
    ("columns", "columns", "colunas"),
    ("invalid_file_type", "Only Excel files (.xlsx, .xls) are accepted", "Apenas ficheiros Excel (.xlsx, .xls) são aceites"),
    // Processing
    ("ready_to_process", "Ready to Process", "Pronto para Processar"),
    ("process_data", "Process Data", "Processar Dados"),
    ("processing", "Processing...", "A processar..."),
    (
        "upload_required",
        "Please upload guests and reservations files to proceed",
        "Por favor carregue os ficheiros de hóspedes e reservas para continuar",
    ),
    ("ready_hint", "Ready to process your data", "Pronto para processar os seus dados"),
    ("start_processing", "🚀 Start Processing", "🚀 Iniciar Processamento"),
    ("processing_error", "Processing Error", "Erro de Processamento"),
    ("status_not_started", "Not started", "Não iniciado"),
    ("status_processing", "Processing", "Em processamento"),
    ("status_completed", "Completed", "Concluído"),
    ("status_failed", "Failed", "Falhou"),
    // Results
    ("results_summary", "Results Summary", "Resumo dos Resultados"),
    ("occupancy_report", "Occupancy Report", "Relatório de Ocupação"),
    ("revenue_report", "Revenue Report", "Relatório de Receitas"),
    ("download_all", "Download All", "Descarregar Tudo"),
    ("occupancy_overview", "Occupancy Overview", "Visão Geral de Ocupação"),
    ("revenue_overview", "Revenue Overview", "Visão Geral de Receitas"),
    ("total_guests", "Total Guests", "Total de Hóspedes"),
    ("total_nights", "Total Nights", "Total de Noites"),
    ("total_reservations", "Reservations", "Reservas"),
    ("gross_revenue", "Gross Revenue", "Receita Bruta"),
    ("net_revenue", "Net Revenue", "Receita Líquida"),
    ("total_commissions", "Total Commissions", "Total de Comissões"),
    ("total_iva", "Total IVA", "Total de IVA"),
    (
        "navigate_hint",
        "Navigate to the Occupancy and Revenue tabs for detailed visualizations",
        "Navegue para os separadores Ocupação e Receitas para visualizações detalhadas",
    ),
    // Occupancy
    ("occupancy_dashboard", "Occupancy Dashboard", "Painel de Ocupação"),
    ("select_property", "Select Property", "Selecionar Propriedade"),
    ("all_properties", "All Properties", "Todas as Propriedades"),
    ("by_nationality", "By Nationality", "Por Nacionalidade"),
    ("guest_distribution", "Guest Distribution", "Distribuição de Hóspedes"),
    ("nights_by_property", "Nights by Property", "Noites por Propriedade"),
    ("person_nights_by_property", "Person-Nights by Property", "Pessoa-Noites por Propriedade"),
    ("detailed_data", "Detailed Data", "Dados Detalhados"),
    ("nationality", "Nationality", "Nacionalidade"),
    ("unique_guests", "Unique Guests", "Hóspedes Únicos"),
    ("total_people", "Total People", "Total de Pessoas"),
    ("person_nights", "Person-Nights", "Pessoa-Noites"),
    // Revenue
    ("revenue_dashboard", "Revenue Dashboard", "Painel de Receitas"),
    ("revenue_by_property", "Revenue by Property", "Receitas por Propriedade"),
    ("revenue_breakdown", "Revenue Breakdown", "Discriminação de Receitas"),
    ("net_vs_commissions", "Net Revenue vs Commissions by Property", "Receita Líquida vs Comissões por Propriedade"),
    ("iva_by_region", "IVA/VAT by Region", "IVA por Região"),
    ("revenue_details", "Revenue by Property Details", "Detalhes de Receitas por Propriedade"),
    ("property", "Property", "Propriedade"),
    ("gross_value", "Gross Value", "Valor Bruto"),
    ("commission", "Commission", "Comissão"),
    ("commissions", "Commissions", "Comissões"),
    ("iva_amount", "IVA Amount", "Valor do IVA"),
    ("iva_vat", "IVA/VAT", "IVA"),
    ("invoice_count", "Invoices", "Faturas"),
    ("net_value", "Net Value", "Valor Líquido"),
    ("invoice_data_available", "Invoice Data Available", "Dados de Faturas Disponíveis"),
    (
        "invoice_compare_hint",
        "Compare reservation data with invoice records",
        "Compare os dados de reservas com os registos de faturas",
    ),
    ("show_invoice_comparison", "Show Invoice Comparison", "Mostrar Comparação de Faturas"),
    ("showing_invoice_data", "Showing Invoice Data", "A Mostrar Dados de Faturas"),
    ("invoice_summary", "Invoice Summary", "Resumo de Faturas"),
    ("invoice_gross", "Invoice Gross", "Bruto Faturado"),
    ("invoice_iva", "Invoice IVA", "IVA Faturado"),
    ("invoice_net", "Invoice Net", "Líquido Faturado"),
    ("total_invoices", "Total Invoices", "Total de Faturas"),
    ("export_reports", "Export Reports", "Exportar Relatórios"),
    (
        "export_hint",
        "Download detailed Excel reports with full calculations and breakdowns.",
        "Descarregue relatórios Excel detalhados com todos os cálculos.",
    ),
    ("download_revenue", "Download Revenue Report", "Descarregar Relatório de Receitas"),
    ("download_occupancy", "Download Occupancy Report", "Descarregar Relatório de Ocupação"),
    // Charts
    ("no_data_available", "No data available", "Sem dados disponíveis"),
    // Errors
    ("upload_failed", "Upload failed", "Falha no carregamento"),
    ("processing_failed", "Processing failed", "Falha no processamento"),
    ("processing_completed", "Processing completed successfully", "Processamento concluído com sucesso"),
    (
        "no_results_available",
        "No results available. Please run processing first.",
        "Sem resultados disponíveis. Por favor execute o processamento primeiro.",
    ),
    // Language
    ("language", "Language", "Idioma"),
    ("english", "English", "English"),
    ("portuguese", "Português", "Português"),
];

/// Переводит ключ; отсутствующий перевод берётся из английского, неизвестный ключ возвращается как есть
pub fn translate<'a>(language: Language, key: &'a str) -> &'a str {
    match TABLE.iter().find(|(k, _, _)| *k == key) {
        Some(&(_, en, pt)) => match language {
            Language::En => en,
            Language::Pt if pt.is_empty() => en,
            Language::Pt => pt,
        },
        None => key,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_with_fallbacks() {
        assert_eq!(translate(Language::Pt, "tab_revenue"), "Receitas");
        assert_eq!(translate(Language::En, "tab_revenue"), "Revenue");
        assert_eq!(translate(Language::Pt, "missing_key"), "missing_key");
    }

    #[test]
    fn test_keys_are_unique() {
        for (i, (key, _, _)) in TABLE.iter().enumerate() {
            assert!(
                TABLE[i + 1..].iter().all(|(k, _, _)| k != key),
                "duplicate key {}",
                key
            );
        }
    }
}
