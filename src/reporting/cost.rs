use chrono::{DateTime, SecondsFormat, Utc};
use crate::monitors::cost::{CostAnalysis, CostRecommendation, RecommendationSeverity, ResourceCost};
use crate::utils::format_signed;

const NEXT_STEPS: [&str; 4] = [
    "Revisar recursos com maior custo e avaliar necessidade",
    "Implementar recomendações de otimização para redução de custos",
    "Configurar alertas para aumentos inesperados de custo",
    "Revisar políticas de escalabilidade automática",
];

pub fn format_cost_report(analysis: &CostAnalysis, rendered_at: &DateTime<Utc>) -> String {
    let mut out = String::from("# Relatório de Custos Cloud\n\n");
    out.push_str(&format!(
        "Gerado em: {}\n\n",
        rendered_at.to_rfc3339_opts(SecondsFormat::Millis, true)
    ));
    out.push_str(&format!(
        "Período analisado: {} a {}\n\n",
        analysis.period.start.format("%Y-%m-%d"),
        analysis.period.end.format("%Y-%m-%d")
    ));

    out.push_str("## Resumo\n\n");
    out.push_str(&format!("- **Custo total no período:** ${}\n", analysis.total_cost));
    out.push_str(&format!("- **Custo do período anterior:** ${}\n", analysis.trends.previous_month_cost));
    out.push_str(&format!("- **Variação:** {}%\n\n", format_signed(analysis.trends.percentage_change)));

    out.push_str("## Recursos por Custo\n\n");
    out.push_str("| Repositório | Recurso | Tipo | Centro de Custo | Custo Total | Média Diária | Variação |\n");
    out.push_str("|-------------|---------|------|----------------|-------------|--------------|----------|\n");
    for resource in analysis.resources_by_cost() {
        out.push_str(&format_resource_row(resource));
    }

    if !analysis.recommendations.is_empty() {
        out.push_str("\n## Recomendações de Otimização\n\n");
        for (i, rec) in analysis.recommendations.iter().enumerate() {
            out.push_str(&format_recommendation(i + 1, rec));
        }
    }

    out.push_str("## Próximos Passos\n\n");
    for (i, step) in NEXT_STEPS.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, step));
    }
    out.push('\n');
    out
}

fn change_glyph(percent: f64) -> &'static str {
    if percent > 10.0 {
        "🔺"
    } else if percent < -10.0 {
        "🔽"
    } else {
        ""
    }
}

fn format_resource_row(resource: &ResourceCost) -> String {
    format!(
        "| {} | {} | {} | {} | ${} | ${} | {} {}% |\n",
        resource.repository,
        resource.resource,
        resource.resource_type,
        resource.cost_center.as_deref().unwrap_or("N/A"),
        resource.total_cost,
        resource.daily_average,
        change_glyph(resource.cost_change_percent),
        format_signed(resource.cost_change_percent),
    )
}

fn format_recommendation(number: usize, rec: &CostRecommendation) -> String {
    let glyph = match rec.severity {
        RecommendationSeverity::High => "🔴",
        RecommendationSeverity::Medium => "🟠",
        RecommendationSeverity::Low => "🟡",
    };
    format!(
        "### {} Recomendação {}\n\n**Recurso:** {}\n\n**Problema:** {}\n\n**Economia potencial:** ${}/mês\n\n",
        glyph, number, rec.resource, rec.message, rec.potential_savings
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use crate::monitors::cost::{CostPeriod, CostTrends, RecommendationKind};

    fn resource(name: &str, total: f64, change: f64) -> ResourceCost {
        ResourceCost {
            repository: "acme/shop".to_string(),
            resource: name.to_string(),
            resource_type: "EC2".to_string(),
            cost_center: Some("web".to_string()),
            total_cost: total,
            daily_average: total / 30.0,
            cost_change_percent: change,
            daily_costs: Vec::new(),
        }
    }

    fn analysis() -> CostAnalysis {
        CostAnalysis {
            period: CostPeriod::ending(NaiveDate::from_ymd_opt(2024, 3, 31).unwrap()),
            total_cost: 450.0,
            resources: vec![resource("small", 150.0, -12.5), resource("big", 300.0, 18.25)],
            trends: CostTrends {
                previous_month_cost: 400.5,
                current_month_cost: 450.0,
                percentage_change: 12.36,
            },
            recommendations: vec![CostRecommendation {
                resource: "big".to_string(),
                kind: RecommendationKind::CostIncrease,
                message: "O recurso big apresentou aumento de custo de 18% em relação ao período anterior.".to_string(),
                severity: RecommendationSeverity::High,
                potential_savings: 60.0,
            }],
        }
    }

    fn rendered_at() -> DateTime<Utc> {
        "2024-03-31T09:00:00.000Z".parse().unwrap()
    }

    #[test]
    fn test_header_and_summary() {
        let md = format_cost_report(&analysis(), &rendered_at());
        assert!(md.starts_with("# Relatório de Custos Cloud\n\nGerado em: 2024-03-31T09:00:00.000Z\n\n"));
        assert!(md.contains("Período analisado: 2024-03-01 a 2024-03-31\n\n"));
        assert!(md.contains("- **Custo total no período:** $450\n"));
        assert!(md.contains("- **Custo do período anterior:** $400.5\n"));
        assert!(md.contains("- **Variação:** +12.36%\n\n"));
    }

    #[test]
    fn test_rows_sorted_with_glyphs() {
        let md = format_cost_report(&analysis(), &rendered_at());
        let big = md.find("| acme/shop | big |").unwrap();
        let small = md.find("| acme/shop | small |").unwrap();
        assert!(big < small);
        assert!(md.contains("| acme/shop | big | EC2 | web | $300 | $10 | 🔺 +18.25% |\n"));
        assert!(md.contains("| acme/shop | small | EC2 | web | $150 | $5 | 🔽 -12.5% |\n"));
    }

    #[test]
    fn test_recommendations_section() {
        let md = format_cost_report(&analysis(), &rendered_at());
        assert!(md.contains("### 🔴 Recomendação 1\n\n**Recurso:** big\n\n"));
        assert!(md.contains("**Economia potencial:** $60/mês\n\n"));

        let mut quiet = analysis();
        quiet.recommendations.clear();
        let md = format_cost_report(&quiet, &rendered_at());
        assert!(!md.contains("## Recomendações de Otimização"));
        assert!(md.contains("## Próximos Passos\n\n1. Revisar recursos com maior custo e avaliar necessidade\n"));
    }

    #[test]
    fn test_change_glyph_bounds() {
        assert_eq!(change_glyph(10.0), "");
        assert_eq!(change_glyph(10.01), "🔺");
        assert_eq!(change_glyph(-10.0), "");
        assert_eq!(change_glyph(-10.5), "🔽");
    }
}
