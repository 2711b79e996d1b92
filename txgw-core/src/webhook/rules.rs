//! Event-name → status-rule tables.

use txgw_sdk::objects::EntityStatus;

/// How the nested `status` of an event maps to the status sent to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusRule {
    /// Update regardless of the incoming status.
    Always(EntityStatus),
    /// Update only when the incoming status matches one of the keys.
    When(&'static [(&'static str, EntityStatus)]),
}

impl StatusRule {
    /// Resolve the status to record, or `None` when nothing should happen.
    pub fn resolve(&self, incoming: Option<&str>) -> Option<EntityStatus> {
        match self {
            StatusRule::Always(status) => Some(*status),
            StatusRule::When(table) => {
                let incoming = incoming?;
                table
                    .iter()
                    .find(|(from, _)| *from == incoming)
                    .map(|(_, to)| *to)
            }
        }
    }
}

/// One row of a gateway's dispatch table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventRule {
    pub event: &'static str,
    pub rule: StatusRule,
}

impl EventRule {
    pub const fn new(event: &'static str, rule: StatusRule) -> Self {
        Self { event, rule }
    }
}

/// Find the rule for an event name. Matching is exact and case-sensitive.
pub fn find_rule<'a>(rules: &'a [EventRule], event: &str) -> Option<&'a EventRule> {
    rules.iter().find(|rule| rule.event == event)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::{INVOICE_RULES, SUBSCRIPTION_RULES};

    #[test]
    fn invoice_table() {
        let paid = find_rule(&INVOICE_RULES, "invoice_paid").unwrap();
        assert_eq!(paid.rule.resolve(Some("paid")), Some(EntityStatus::Paid));
        assert_eq!(paid.rule.resolve(Some("unpaid")), None);
        assert_eq!(paid.rule.resolve(None), None);

        let created = find_rule(&INVOICE_RULES, "invoice_created").unwrap();
        assert_eq!(created.rule.resolve(Some("paid")), Some(EntityStatus::Paid));
        assert_eq!(created.rule.resolve(Some("draft")), None);

        let canceled = find_rule(&INVOICE_RULES, "invoice_canceled").unwrap();
        assert_eq!(canceled.rule.resolve(None), Some(EntityStatus::Canceled));
        assert_eq!(canceled.rule.resolve(Some("paid")), Some(EntityStatus::Canceled));

        assert!(find_rule(&INVOICE_RULES, "Invoice_Paid").is_none());
        assert!(find_rule(&INVOICE_RULES, "subscription_created").is_none());
    }

    #[test]
    fn subscription_table() {
        let updated = find_rule(&SUBSCRIPTION_RULES, "subscription_updated").unwrap();
        assert_eq!(updated.rule.resolve(Some("active")), Some(EntityStatus::Active));
        assert_eq!(updated.rule.resolve(Some("inactive")), Some(EntityStatus::Inactive));
        assert_eq!(updated.rule.resolve(Some("pending")), None);

        let created = find_rule(&SUBSCRIPTION_RULES, "subscription_created").unwrap();
        assert_eq!(created.rule.resolve(Some("active")), Some(EntityStatus::Active));
        assert_eq!(created.rule.resolve(Some("inactive")), None);

        let canceled = find_rule(&SUBSCRIPTION_RULES, "subscription_canceled").unwrap();
        assert_eq!(canceled.rule.resolve(Some("whatever")), Some(EntityStatus::Canceled));
    }
}
