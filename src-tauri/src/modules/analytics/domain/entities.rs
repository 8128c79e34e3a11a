use serde::{Deserialize, Serialize};
use specta::Type;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[serde(rename_all = "lowercase")]
pub enum AnalyticsPeriod {
    Weekly,
    Monthly,
}

impl AnalyticsPeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalyticsPeriod::Weekly => "weekly",
            AnalyticsPeriod::Monthly => "monthly",
        }
    }
}

/// Completed koli per machine and per operator over the period.
#[derive(Debug, Clone, Serialize, Deserialize, Type)]
pub struct ProductionStats {
    #[serde(default)]
    pub machine_stats: HashMap<String, i64>,
    #[serde(default)]
    pub operator_stats: HashMap<String, i64>,
}

impl ProductionStats {
    pub fn total_koli(&self) -> i64 {
        self.machine_stats.values().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_koli_sums_machines() {
        let mut stats = ProductionStats {
            machine_stats: HashMap::new(),
            operator_stats: HashMap::new(),
        };
        stats.machine_stats.insert("30x30".to_string(), 120);
        stats.machine_stats.insert("24x24".to_string(), 80);
        assert_eq!(stats.total_koli(), 200);
    }
}
