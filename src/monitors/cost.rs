use chrono::{Duration, NaiveDate};
use rand::Rng;
use serde::Serialize;
use crate::models::RepositoryRef;
use crate::utils::round_cents;

pub const PERIOD_DAYS: i64 = 30;
const COST_INCREASE_ALERT_PERCENT: f64 = 15.0;
const UNDERUTILIZED_CHANCE_THRESHOLD: f64 = 0.7;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostPeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl CostPeriod {
    /// The 30 days ending on `today`.
    pub fn ending(today: NaiveDate) -> Self {
        Self { start: today - Duration::days(PERIOD_DAYS), end: today }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResourceCost {
    pub repository: String,
    pub resource: String,
    #[serde(rename = "type")]
    pub resource_type: String,
    pub cost_center: Option<String>,
    pub total_cost: f64,
    pub daily_average: f64,
    pub cost_change_percent: f64,
    pub daily_costs: Vec<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationKind {
    CostIncrease,
    Underutilized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationSeverity {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostRecommendation {
    pub resource: String,
    pub kind: RecommendationKind,
    pub message: String,
    pub severity: RecommendationSeverity,
    pub potential_savings: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CostTrends {
    pub previous_month_cost: f64,
    pub current_month_cost: f64,
    pub percentage_change: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostAnalysis {
    pub period: CostPeriod,
    pub total_cost: f64,
    pub resources: Vec<ResourceCost>,
    pub trends: CostTrends,
    pub recommendations: Vec<CostRecommendation>,
}

impl CostAnalysis {
    /// Resources ordered by total cost, most expensive first.
    pub fn resources_by_cost(&self) -> Vec<&ResourceCost> {
        let mut sorted: Vec<&ResourceCost> = self.resources.iter().collect();
        sorted.sort_by(|a, b| b.total_cost.total_cmp(&a.total_cost));
        sorted
    }
}

fn base_daily_cost(resource_type: &str) -> f64 {
    match resource_type {
        "RDS" => 15.0,
        "EC2" => 8.0,
        _ => 5.0,
    }
}

/// Simulate a month of spend for every configured cloud resource.
pub fn simulate_cloud_costs<R: Rng>(
    repositories: &[RepositoryRef],
    rng: &mut R,
    today: NaiveDate,
) -> CostAnalysis {
    let mut total_cost = 0.0;
    let mut previous_total = 0.0;
    let mut resources = Vec::new();
    let mut recommendations = Vec::new();

    for repo in repositories {
        for resource in &repo.cloud_resources {
            let base = base_daily_cost(&resource.resource_type);
            let daily_costs: Vec<f64> = (0..PERIOD_DAYS)
                .map(|_| base * (0.85 + rng.gen::<f64>() * 0.3))
                .collect();
            let resource_total: f64 = daily_costs.iter().sum();
            let average = resource_total / PERIOD_DAYS as f64;
            let previous = resource_total * (0.9 + rng.gen::<f64>() * 0.2);
            let change = (resource_total - previous) / previous * 100.0;

            total_cost += resource_total;
            previous_total += previous;

            resources.push(ResourceCost {
                repository: repo.display_name(),
                resource: resource.name.clone(),
                resource_type: resource.resource_type.clone(),
                cost_center: resource.cost_center.clone(),
                total_cost: round_cents(resource_total),
                daily_average: round_cents(average),
                cost_change_percent: round_cents(change),
                daily_costs: daily_costs.iter().map(|c| round_cents(*c)).collect(),
            });

            if change > COST_INCREASE_ALERT_PERCENT {
                recommendations.push(CostRecommendation {
                    resource: resource.name.clone(),
                    kind: RecommendationKind::CostIncrease,
                    message: format!(
                        "O recurso {} apresentou aumento de custo de {}% em relação ao período anterior.",
                        resource.name,
                        change.round()
                    ),
                    severity: RecommendationSeverity::High,
                    potential_savings: round_cents(resource_total * 0.2),
                });
            }

            if resource.resource_type == "EC2" && rng.gen::<f64>() > UNDERUTILIZED_CHANCE_THRESHOLD {
                recommendations.push(CostRecommendation {
                    resource: resource.name.clone(),
                    kind: RecommendationKind::Underutilized,
                    message: format!(
                        "O recurso {} apresenta baixa utilização (<20% CPU). Considere redimensionar.",
                        resource.name
                    ),
                    severity: RecommendationSeverity::Medium,
                    potential_savings: round_cents(resource_total * 0.4),
                });
            }
        }
    }

    let percentage_change = if previous_total > 0.0 {
        round_cents((total_cost - previous_total) / previous_total * 100.0)
    } else {
        0.0
    };

    CostAnalysis {
        period: CostPeriod::ending(today),
        total_cost: round_cents(total_cost),
        resources,
        trends: CostTrends {
            previous_month_cost: round_cents(previous_total),
            current_month_cost: round_cents(total_cost),
            percentage_change,
        },
        recommendations,
    }
}
