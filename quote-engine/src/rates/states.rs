use serde::Serialize;

/// Shipping economics for vehicles leaving a given US state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct StateTransportRecord {
    pub code: &'static str,
    pub name: &'static str,
    /// Georgian display name.
    pub name_ka: &'static str,
    /// USD to move a standard vehicle from this state to Georgia.
    pub base_transport_cost: u32,
    pub estimated_days: u32,
    pub common_auctions: &'static [&'static str],
}

impl StateTransportRecord {
    pub fn display_name(&self) -> &'static str {
        self.name_ka
    }
}

pub const FALLBACK_TRANSPORT_COST: u32 = 1700;
pub const FALLBACK_ESTIMATED_DAYS: u32 = 20;
pub const FALLBACK_DISPLAY_NAME: &str = "Unknown State";

pub static STATE_RECORDS: [StateTransportRecord; 12] = [
    StateTransportRecord {
        code: "CA",
        name: "California",
        name_ka: "კალიფორნია",
        base_transport_cost: 1850,
        estimated_days: 21,
        common_auctions: &["Copart", "IAA"],
    },
    StateTransportRecord {
        code: "TX",
        name: "Texas",
        name_ka: "ტეხასი",
        base_transport_cost: 1650,
        estimated_days: 18,
        common_auctions: &["Copart", "IAA"],
    },
    StateTransportRecord {
        code: "FL",
        name: "Florida",
        name_ka: "ფლორიდა",
        base_transport_cost: 1750,
        estimated_days: 19,
        common_auctions: &["Copart", "IAA", "Manheim"],
    },
    StateTransportRecord {
        code: "NY",
        name: "New York",
        name_ka: "ნიუ-იორკი",
        base_transport_cost: 1950,
        estimated_days: 22,
        common_auctions: &["Copart", "Manheim"],
    },
    StateTransportRecord {
        code: "NJ",
        name: "New Jersey",
        name_ka: "ნიუ-ჯერსი",
        base_transport_cost: 1900,
        estimated_days: 21,
        common_auctions: &["Copart", "IAA"],
    },
    StateTransportRecord {
        code: "PA",
        name: "Pennsylvania",
        name_ka: "პენსილვანია",
        base_transport_cost: 1800,
        estimated_days: 20,
        common_auctions: &["Copart", "Manheim"],
    },
    StateTransportRecord {
        code: "OH",
        name: "Ohio",
        name_ka: "ოჰაიო",
        base_transport_cost: 1700,
        estimated_days: 19,
        common_auctions: &["Copart", "IAA"],
    },
    StateTransportRecord {
        code: "IL",
        name: "Illinois",
        name_ka: "ილინოისი",
        base_transport_cost: 1750,
        estimated_days: 20,
        common_auctions: &["Copart", "Manheim"],
    },
    StateTransportRecord {
        code: "AZ",
        name: "Arizona",
        name_ka: "არიზონა",
        base_transport_cost: 1600,
        estimated_days: 18,
        common_auctions: &["Copart", "IAA"],
    },
    StateTransportRecord {
        code: "NV",
        name: "Nevada",
        name_ka: "ნევადა",
        base_transport_cost: 1700,
        estimated_days: 19,
        common_auctions: &["Copart", "IAA"],
    },
    StateTransportRecord {
        code: "NC",
        name: "North Carolina",
        name_ka: "ჩრდილოეთ კაროლინა",
        base_transport_cost: 1550,
        estimated_days: 17,
        common_auctions: &["Copart", "IAA"],
    },
    StateTransportRecord {
        code: "GA",
        name: "Georgia (US)",
        name_ka: "ჯორჯია (აშშ)",
        base_transport_cost: 1450,
        estimated_days: 16,
        common_auctions: &["Copart", "IAA", "Manheim"],
    },
];

/// Exact lookup after trimming; ASCII case is ignored.
pub fn state_record(code: &str) -> Option<&'static StateTransportRecord> {
    let code = code.trim();
    STATE_RECORDS
        .iter()
        .find(|record| record.code.eq_ignore_ascii_case(code))
}

/// A state record, or the fallback used when the code is unknown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransportOrigin {
    record: Option<&'static StateTransportRecord>,
}

impl TransportOrigin {
    pub fn record(&self) -> Option<&'static StateTransportRecord> {
        self.record
    }

    pub fn is_fallback(&self) -> bool {
        self.record.is_none()
    }

    pub fn code(&self) -> Option<&'static str> {
        self.record.map(|record| record.code)
    }

    pub fn transport_cost(&self) -> u32 {
        self.record
            .map(|record| record.base_transport_cost)
            .unwrap_or(FALLBACK_TRANSPORT_COST)
    }

    pub fn estimated_days(&self) -> u32 {
        self.record
            .map(|record| record.estimated_days)
            .unwrap_or(FALLBACK_ESTIMATED_DAYS)
    }

    pub fn display_name(&self) -> &'static str {
        self.record
            .map(|record| record.display_name())
            .unwrap_or(FALLBACK_DISPLAY_NAME)
    }
}

/// Never fails: unknown codes resolve to the fallback record.
pub fn resolve_origin(code: &str) -> TransportOrigin {
    let record = state_record(code);
    if record.is_none() {
        tracing::debug!(code, "no transport record for state, using fallback");
    }
    TransportOrigin { record }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn codes_are_unique_and_economics_positive() {
        let codes: HashSet<_> = STATE_RECORDS.iter().map(|record| record.code).collect();
        assert_eq!(codes.len(), STATE_RECORDS.len());
        for record in &STATE_RECORDS {
            assert!(record.base_transport_cost > 0, "{}", record.code);
            assert!(record.estimated_days > 0, "{}", record.code);
        }
    }

    #[test]
    fn lookup_ignores_case_and_whitespace() {
        let record = state_record(" tx ").expect("texas");
        assert_eq!(record.code, "TX");
        assert_eq!(record.base_transport_cost, 1650);
    }

    #[test]
    fn unknown_code_resolves_to_fallback() {
        let origin = resolve_origin("ZZ");
        assert!(origin.is_fallback());
        assert_eq!(origin.code(), None);
        assert_eq!(origin.transport_cost(), 1700);
        assert_eq!(origin.estimated_days(), 20);
        assert_eq!(origin.display_name(), "Unknown State");
    }

    #[test]
    fn known_code_uses_georgian_display_name() {
        let origin = resolve_origin("GA");
        assert_eq!(origin.display_name(), "ჯორჯია (აშშ)");
        assert_eq!(origin.estimated_days(), 16);
    }
}
