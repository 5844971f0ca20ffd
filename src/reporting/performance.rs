use chrono::{DateTime, SecondsFormat, Utc};
use crate::monitors::EndpointCheck;

pub const DASHBOARD_URL: &str = "https://github.com/dotsoffa/security-performance-dashboard/projects";

pub fn format_performance_report(checks: &[EndpointCheck], rendered_at: &DateTime<Utc>) -> String {
    let mut out = String::from("# Relatório de Performance de APIs\n\n");
    out.push_str(&format!(
        "Gerado em: {}\n\n",
        rendered_at.to_rfc3339_opts(SecondsFormat::Millis, true)
    ));

    let slow = checks.iter().filter(|c| c.is_over_threshold).count();
    let errors = checks.iter().filter(|c| c.is_error()).count();
    out.push_str("## Resumo\n\n");
    out.push_str(&format!("- **Total de endpoints monitorados:** {}\n", checks.len()));
    out.push_str(&format!("- **Endpoints com performance abaixo do esperado:** {}\n", slow));
    out.push_str(&format!("- **Endpoints com erros:** {}\n\n", errors));

    out.push_str("## Resultados\n\n");
    out.push_str("| Repositório | Endpoint | Status | Tempo de Resposta | Limite | Situação |\n");
    out.push_str("|-------------|----------|--------|-------------------|--------|----------|\n");
    for check in checks {
        let status = if check.is_error() {
            format!("❌ Erro ({})", check.status)
        } else {
            "✅ OK".to_string()
        };
        let performance = if check.is_over_threshold {
            format!("⚠️ {}ms", check.response_time_ms)
        } else {
            format!("✅ {}ms", check.response_time_ms)
        };
        let situation = if check.is_error() {
            "❌ Falha"
        } else if check.is_over_threshold {
            "⚠️ Lento"
        } else {
            "✅ Normal"
        };
        out.push_str(&format!(
            "| {} | {} | {} | {} | {}ms | {} |\n",
            check.repository, check.endpoint, status, performance, check.threshold_ms, situation
        ));
    }

    let problems: Vec<&EndpointCheck> = checks.iter().filter(|c| c.has_problem()).collect();
    if !problems.is_empty() {
        out.push_str("\n## Endpoints com Problemas\n\n");
        for check in problems {
            out.push_str(&format_problem(check));
        }
    }

    out.push_str("## Tendência de Performance\n\n");
    out.push_str("Para visualizar tendências de performance ao longo do tempo, acesse o dashboard completo em:\n");
    out.push_str(&format!("{}\n\n", DASHBOARD_URL));
    out
}

fn format_problem(check: &EndpointCheck) -> String {
    let mut out = format!("### {} ({})\n\n", check.endpoint, check.url);
    out.push_str(&format!("- **Repositório:** {}\n", check.repository));
    out.push_str(&format!("- **Status:** {}\n", if check.is_error() { "Erro" } else { "OK" }));
    out.push_str(&format!("- **Tempo de Resposta:** {}ms\n", check.response_time_ms));
    out.push_str(&format!("- **Limite configurado:** {}ms\n", check.threshold_ms));
    out.push_str(&format!(
        "- **Problema:** {}\n\n",
        if check.is_error() { "Endpoint retornou erro" } else { "Tempo de resposta acima do limite" }
    ));

    out.push_str("**Recomendações:**\n");
    let recommendations: [&str; 3] = if check.is_error() {
        [
            "Verificar se o serviço está em execução",
            "Verificar logs do serviço para erros",
            "Confirmar configuração de rede e firewalls",
        ]
    } else {
        [
            "Verificar carga do servidor",
            "Analisar queries de banco de dados",
            "Considerar otimização de código ou cache",
        ]
    };
    for rec in recommendations {
        out.push_str(&format!("- {}\n", rec));
    }
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(endpoint: &str, status: u16, response_time_ms: u64, threshold_ms: u64) -> EndpointCheck {
        EndpointCheck {
            repository: "acme/api".to_string(),
            endpoint: endpoint.to_string(),
            url: format!("https://acme/{}", endpoint),
            status,
            response_time_ms,
            timestamp: "2024-05-01T12:00:00.000Z".to_string(),
            threshold_ms,
            is_over_threshold: response_time_ms > threshold_ms,
        }
    }

    fn rendered_at() -> DateTime<Utc> {
        "2024-05-01T12:00:01.500Z".parse().unwrap()
    }

    #[test]
    fn test_summary_counts() {
        let checks = vec![
            check("health", 200, 120, 1000),
            check("search", 200, 1500, 1000),
            check("login", 500, 90, 1000),
        ];
        let md = format_performance_report(&checks, &rendered_at());
        assert!(md.contains("Gerado em: 2024-05-01T12:00:01.500Z\n"));
        assert!(md.contains("- **Total de endpoints monitorados:** 3\n"));
        assert!(md.contains("- **Endpoints com performance abaixo do esperado:** 1\n"));
        assert!(md.contains("- **Endpoints com erros:** 1\n\n"));
    }

    #[test]
    fn test_result_rows() {
        let checks = vec![
            check("health", 200, 120, 1000),
            check("search", 200, 1500, 1000),
            check("login", 500, 90, 1000),
        ];
        let md = format_performance_report(&checks, &rendered_at());
        assert!(md.contains("| acme/api | health | ✅ OK | ✅ 120ms | 1000ms | ✅ Normal |\n"));
        assert!(md.contains("| acme/api | search | ✅ OK | ⚠️ 1500ms | 1000ms | ⚠️ Lento |\n"));
        assert!(md.contains("| acme/api | login | ❌ Erro (500) | ✅ 90ms | 1000ms | ❌ Falha |\n"));
    }

    #[test]
    fn test_problem_section_only_for_problems() {
        let md = format_performance_report(&[check("health", 200, 120, 1000)], &rendered_at());
        assert!(!md.contains("## Endpoints com Problemas"));

        let md = format_performance_report(
            &[check("health", 200, 120, 1000), check("login", 500, 90, 1000)],
            &rendered_at(),
        );
        assert!(md.contains("## Endpoints com Problemas"));
        assert!(md.contains("### login (https://acme/login)\n\n"));
        assert!(!md.contains("### health"));
        assert!(md.contains("- **Problema:** Endpoint retornou erro\n"));
        assert!(md.contains("- Verificar se o serviço está em execução\n"));
    }

    #[test]
    fn test_slow_endpoint_recommendations() {
        let md = format_performance_report(&[check("search", 200, 1500, 1000)], &rendered_at());
        assert!(md.contains("- **Problema:** Tempo de resposta acima do limite\n"));
        assert!(md.contains("- Considerar otimização de código ou cache\n"));
    }

    #[test]
    fn test_trend_section_always_present() {
        let md = format_performance_report(&[], &rendered_at());
        assert!(md.contains("- **Total de endpoints monitorados:** 0\n"));
        assert!(md.ends_with(&format!("{}\n\n", DASHBOARD_URL)));
    }
}
