//! Order disputes raised by customers, monitored by admins.

use serde::{Deserialize, Serialize};

use crate::shared::lenient;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisputeStatus {
    Open,
    #[serde(alias = "in_review", alias = "reviewing")]
    Investigating,
    Resolved,
    Rejected,
    #[default]
    #[serde(other)]
    Unknown,
}

impl DisputeStatus {
    pub fn all() -> Vec<DisputeStatus> {
        vec![
            DisputeStatus::Open,
            DisputeStatus::Investigating,
            DisputeStatus::Resolved,
            DisputeStatus::Rejected,
        ]
    }

    pub fn code(&self) -> &'static str {
        match self {
            DisputeStatus::Open => "open",
            DisputeStatus::Investigating => "investigating",
            DisputeStatus::Resolved => "resolved",
            DisputeStatus::Rejected => "rejected",
            DisputeStatus::Unknown => "unknown",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.code() == code)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DisputeStatus::Open => "Mới mở",
            DisputeStatus::Investigating => "Đang xem xét",
            DisputeStatus::Resolved => "Đã giải quyết",
            DisputeStatus::Rejected => "Từ chối",
            DisputeStatus::Unknown => "Không rõ",
        }
    }

    /// Still needs an admin's attention.
    pub fn is_active(&self) -> bool {
        matches!(self, DisputeStatus::Open | DisputeStatus::Investigating)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dispute {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default, alias = "orderId", alias = "order")]
    pub order_id: Option<String>,
    #[serde(default, alias = "customerName", alias = "username")]
    pub customer_name: Option<String>,
    #[serde(default, alias = "gameTitle", alias = "gameName")]
    pub game_title: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub status: DisputeStatus,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub amount: Option<f64>,
    #[serde(default, alias = "createdAt")]
    pub created_at: Option<String>,
}

impl Dispute {
    /// Case-insensitive match on customer, game, order id or reason.
    pub fn matches_filter(&self, filter: &str) -> bool {
        let filter = filter.trim().to_lowercase();
        if filter.is_empty() {
            return true;
        }
        [
            &self.customer_name,
            &self.game_title,
            &self.order_id,
            &self.reason,
        ]
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(&filter))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisputeSummary {
    pub total: usize,
    pub open: usize,
    pub investigating: usize,
    pub resolved: usize,
    /// Sum of the amounts of unresolved disputes.
    pub amount_at_stake: f64,
}

pub fn summarize_disputes(disputes: &[Dispute]) -> DisputeSummary {
    let mut summary = DisputeSummary {
        total: disputes.len(),
        ..DisputeSummary::default()
    };
    for dispute in disputes {
        match dispute.status {
            DisputeStatus::Open => summary.open += 1,
            DisputeStatus::Investigating => summary.investigating += 1,
            DisputeStatus::Resolved => summary.resolved += 1,
            _ => {}
        }
        if dispute.status.is_active() {
            summary.amount_at_stake += dispute.amount.unwrap_or(0.0);
        }
    }
    summary
}

/// Disputes matching the status and search, active ones first; otherwise in
/// backend order.
pub fn filter_disputes(
    disputes: &[Dispute],
    status: Option<DisputeStatus>,
    search: &str,
) -> Vec<Dispute> {
    let mut visible: Vec<Dispute> = disputes
        .iter()
        .filter(|d| status.map_or(true, |s| d.status == s))
        .filter(|d| d.matches_filter(search))
        .cloned()
        .collect();
    visible.sort_by_key(|d| !d.status.is_active());
    visible
}

#[cfg(test)]
mod tests {
    use super::*;

    fn disputes() -> Vec<Dispute> {
        serde_json::from_str(
            r#"[
                {"_id":"d1","orderId":"o1","customerName":"An","gameTitle":"Elden Ring","status":"resolved","amount":"500000"},
                {"_id":"d2","orderId":"o2","username":"Bình","gameName":"Hades","reason":"Không tải được","status":"open","amount":200000},
                {"_id":"d3","order":"o3","status":"in_review","amount":null},
                {"_id":"d4","status":"escalated"}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_parse_aliases() {
        let all = disputes();
        assert_eq!(all[0].amount, Some(500000.0));
        assert_eq!(all[1].customer_name.as_deref(), Some("Bình"));
        assert_eq!(all[2].status, DisputeStatus::Investigating);
        assert_eq!(all[2].order_id.as_deref(), Some("o3"));
        assert_eq!(all[3].status, DisputeStatus::Unknown);
    }

    #[test]
    fn test_summary_counts_active_amounts_only() {
        let summary = summarize_disputes(&disputes());
        assert_eq!(summary.total, 4);
        assert_eq!(summary.open, 1);
        assert_eq!(summary.investigating, 1);
        assert_eq!(summary.resolved, 1);
        assert_eq!(summary.amount_at_stake, 200000.0);
    }

    #[test]
    fn test_active_disputes_come_first() {
        let ids: Vec<String> = filter_disputes(&disputes(), None, "")
            .into_iter()
            .map(|d| d.id)
            .collect();
        assert_eq!(ids, vec!["d2", "d3", "d1", "d4"]);
    }

    #[test]
    fn test_filter_by_status_and_search() {
        let open = filter_disputes(&disputes(), Some(DisputeStatus::Open), "");
        assert_eq!(open.len(), 1);
        assert_eq!(filter_disputes(&disputes(), None, "TẢI")[0].id, "d2");
        assert_eq!(filter_disputes(&disputes(), None, "o3")[0].id, "d3");
        assert!(filter_disputes(&disputes(), Some(DisputeStatus::Resolved), "hades").is_empty());
    }

    #[test]
    fn test_status_codes() {
        for status in DisputeStatus::all() {
            assert_eq!(DisputeStatus::from_code(status.code()), Some(status));
        }
        assert_eq!(DisputeStatus::from_code("unknown"), None);
    }
}
