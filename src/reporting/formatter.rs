use chrono::NaiveDateTime;
use crate::models::{format_timestamp, AggregateReport, ScanReportEntry, ScanResult, VulnerabilityCount, VulnerabilityRecord};

/// Records listed per repository in the details section.
pub const MAX_DETAILED_VULNERABILITIES: usize = 5;

pub const PASS_GLYPH: &str = "✅ OK";
pub const FAIL_GLYPH: &str = "❌ Problemas";

const RECOMMENDATIONS: [&str; 3] = [
    "Atualize as dependências com vulnerabilidades críticas o mais rápido possível",
    "Agende atualizações regulares para dependências com vulnerabilidades de baixa severidade",
    "Considere alternativas para pacotes com histórico constante de problemas de segurança",
];

/// Render the security summary. The header carries `rendered_at`, not the
/// report's own `generated_at`.
pub fn format_security_report(report: &AggregateReport, rendered_at: &NaiveDateTime) -> String {
    let mut out = String::new();
    out.push_str("# Relatório de Segurança\n\n");
    out.push_str(&format!("Gerado em: {}\n\n", format_timestamp(rendered_at)));

    out.push_str(&format_summary(&report.results));
    out.push_str(&format!(
        "\n**Total de vulnerabilidades encontradas:** {}\n\n",
        report.total_vulnerabilities()
    ));

    out.push_str("## Detalhes\n\n");
    for entry in &report.results {
        out.push_str(&format_entry_details(entry));
    }

    out.push_str("## Recomendações\n\n");
    for (i, rec) in RECOMMENDATIONS.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, rec));
    }
    out
}

pub fn status_glyph(result: &ScanResult) -> &'static str {
    if result.is_clean() { PASS_GLYPH } else { FAIL_GLYPH }
}

fn format_summary(entries: &[ScanReportEntry]) -> String {
    let mut out = String::from("## Resumo\n\n");
    out.push_str("| Repositório | Status | Vulnerabilidades |\n");
    out.push_str("|------------|--------|------------------|\n");
    for entry in entries {
        let count = entry.result
            .vulnerability_count()
            .map(|n| n.to_string())
            .unwrap_or_else(|| "N/A".to_string());
        out.push_str(&format!(
            "| {} | {} | {} |\n",
            entry.repository,
            status_glyph(&entry.result),
            count
        ));
    }
    out
}

fn format_entry_details(entry: &ScanReportEntry) -> String {
    let mut out = format!("### {}\n\n", entry.repository);
    match &entry.result {
        ScanResult::Error { message } => {
            let message = if message.is_empty() { "Desconhecido" } else { message.as_str() };
            out.push_str(&format!("Erro durante o escaneamento: {}\n\n", message));
        }
        ScanResult::Success { vulnerabilities, details } => {
            let count = match vulnerabilities {
                None => Some(0),
                Some(VulnerabilityCount::Count(n)) => Some(*n),
                Some(VulnerabilityCount::Unparsed(_)) => None,
            };
            match count {
                Some(n) => out.push_str(&format!("Vulnerabilidades encontradas: {}\n\n", n)),
                None => out.push_str("Vulnerabilidades encontradas: N/A\n\n"),
            }

            if count.unwrap_or(0) > 0 && !details.is_empty() {
                out.push_str("#### Detalhes das vulnerabilidades\n\n");
                for record in details.iter().take(MAX_DETAILED_VULNERABILITIES) {
                    out.push_str(&format_vulnerability(record));
                }
            }
        }
    }
    out
}

fn format_vulnerability(record: &VulnerabilityRecord) -> String {
    format!(
        "- **{}**: {}\n  - Severidade: {}\n  - CVSS: {}\n\n",
        record.package.as_deref().unwrap_or("Desconhecido"),
        record.description.as_deref().unwrap_or("Sem descrição"),
        record.severity.as_deref().unwrap_or("Não especificada"),
        record.cvss_score.as_ref().map(|s| s.to_string()).unwrap_or_else(|| "N/A".to_string()),
    )
}
