use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::QuoteError;

/// Vehicle categories offered by the quote calculator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleKind {
    Sedan,
    Suv,
    Pickup,
    Luxury,
    Van,
    Motorcycle,
    Oversized,
}

impl VehicleKind {
    pub const ALL: [VehicleKind; 7] = [
        VehicleKind::Sedan,
        VehicleKind::Suv,
        VehicleKind::Pickup,
        VehicleKind::Luxury,
        VehicleKind::Van,
        VehicleKind::Motorcycle,
        VehicleKind::Oversized,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            VehicleKind::Sedan => "sedan",
            VehicleKind::Suv => "suv",
            VehicleKind::Pickup => "pickup",
            VehicleKind::Luxury => "luxury",
            VehicleKind::Van => "van",
            VehicleKind::Motorcycle => "motorcycle",
            VehicleKind::Oversized => "oversized",
        }
    }

    /// Rate entry for this kind. Every kind has exactly one.
    pub fn rate(&self) -> &'static VehicleTypeRate {
        match self {
            VehicleKind::Sedan => &VEHICLE_TYPE_RATES[0],
            VehicleKind::Suv => &VEHICLE_TYPE_RATES[1],
            VehicleKind::Pickup => &VEHICLE_TYPE_RATES[2],
            VehicleKind::Luxury => &VEHICLE_TYPE_RATES[3],
            VehicleKind::Van => &VEHICLE_TYPE_RATES[4],
            VehicleKind::Motorcycle => &VEHICLE_TYPE_RATES[5],
            VehicleKind::Oversized => &VEHICLE_TYPE_RATES[6],
        }
    }

    pub fn multiplier(&self) -> f64 {
        self.rate().multiplier
    }
}

impl fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for VehicleKind {
    type Err = QuoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VehicleKind::ALL
            .into_iter()
            .find(|kind| kind.id() == s)
            .ok_or_else(|| QuoteError::UnknownVehicleType(s.to_string()))
    }
}

/// Coarse grouping shown next to a vehicle type. Not used in pricing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleCategory {
    Standard,
    Large,
    Premium,
}

impl VehicleCategory {
    pub fn label(&self) -> &'static str {
        match self {
            VehicleCategory::Standard => "standard",
            VehicleCategory::Large => "large",
            VehicleCategory::Premium => "premium",
        }
    }
}

/// Maximum dimensions a vehicle type covers, as display labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Dimensions {
    pub length: &'static str,
    pub width: &'static str,
    pub height: &'static str,
    pub weight: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct VehicleTypeRate {
    pub id: VehicleKind,
    pub name: &'static str,
    /// Georgian display name.
    pub name_ka: &'static str,
    pub category: VehicleCategory,
    pub multiplier: f64,
    pub dimensions: Dimensions,
    pub examples: &'static [&'static str],
    pub icon: &'static str,
}

impl VehicleTypeRate {
    /// "Standard" for a neutral multiplier, otherwise the signed percentage.
    pub fn surcharge_label(&self) -> String {
        super::surcharge_label(self.multiplier)
    }
}

/// Ordered to match [`VehicleKind::ALL`].
pub static VEHICLE_TYPE_RATES: [VehicleTypeRate; 7] = [
    VehicleTypeRate {
        id: VehicleKind::Sedan,
        name: "Sedan",
        name_ka: "სედანი",
        category: VehicleCategory::Standard,
        multiplier: 1.0,
        dimensions: Dimensions {
            length: "Up to 16 ft",
            width: "Up to 6 ft",
            height: "Up to 5.5 ft",
            weight: "Up to 4,000 lbs",
        },
        examples: &["Toyota Camry", "Honda Accord", "BMW 3 Series"],
        icon: "🚗",
    },
    VehicleTypeRate {
        id: VehicleKind::Suv,
        name: "SUV",
        name_ka: "ჯიპი",
        category: VehicleCategory::Large,
        multiplier: 1.15,
        dimensions: Dimensions {
            length: "Up to 18 ft",
            width: "Up to 7 ft",
            height: "Up to 7 ft",
            weight: "Up to 6,000 lbs",
        },
        examples: &["Toyota RAV4", "Honda CR-V", "BMW X5"],
        icon: "🚙",
    },
    VehicleTypeRate {
        id: VehicleKind::Pickup,
        name: "Pickup Truck",
        name_ka: "პიკაპი",
        category: VehicleCategory::Large,
        multiplier: 1.2,
        dimensions: Dimensions {
            length: "Up to 20 ft",
            width: "Up to 7 ft",
            height: "Up to 7 ft",
            weight: "Up to 7,000 lbs",
        },
        examples: &["Ford F-150", "Chevrolet Silverado", "Toyota Tacoma"],
        icon: "🛻",
    },
    VehicleTypeRate {
        id: VehicleKind::Luxury,
        name: "Luxury/Sports Car",
        name_ka: "ლუქს/სპორტული",
        category: VehicleCategory::Premium,
        multiplier: 1.3,
        dimensions: Dimensions {
            length: "Up to 16 ft",
            width: "Up to 6.5 ft",
            height: "Up to 5 ft",
            weight: "Up to 4,500 lbs",
        },
        examples: &["Mercedes S-Class", "Porsche 911", "Tesla Model S"],
        icon: "🏎️",
    },
    VehicleTypeRate {
        id: VehicleKind::Van,
        name: "Van/Minivan",
        name_ka: "მიკრობუსი",
        category: VehicleCategory::Large,
        multiplier: 1.25,
        dimensions: Dimensions {
            length: "Up to 19 ft",
            width: "Up to 7 ft",
            height: "Up to 8 ft",
            weight: "Up to 6,500 lbs",
        },
        examples: &["Honda Odyssey", "Toyota Sienna", "Ford Transit"],
        icon: "🚐",
    },
    VehicleTypeRate {
        id: VehicleKind::Motorcycle,
        name: "Motorcycle",
        name_ka: "მოტოციკლი",
        category: VehicleCategory::Standard,
        multiplier: 0.6,
        dimensions: Dimensions {
            length: "Up to 8 ft",
            width: "Up to 3 ft",
            height: "Up to 4 ft",
            weight: "Up to 800 lbs",
        },
        examples: &["Harley Davidson", "Honda CBR", "Yamaha R1"],
        icon: "🏍️",
    },
    VehicleTypeRate {
        id: VehicleKind::Oversized,
        name: "Oversized Vehicle",
        name_ka: "გაბარიტული",
        category: VehicleCategory::Premium,
        multiplier: 1.5,
        dimensions: Dimensions {
            length: "Over 20 ft",
            width: "Over 7 ft",
            height: "Over 8 ft",
            weight: "Over 7,000 lbs",
        },
        examples: &["RV", "Large Truck", "Construction Vehicle"],
        icon: "🚛",
    },
];

/// Looks up a vehicle type by its string id.
pub fn vehicle_type_rate(id: &str) -> Option<&'static VehicleTypeRate> {
    VEHICLE_TYPE_RATES.iter().find(|rate| rate.id.id() == id)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn every_kind_resolves_to_its_own_rate() {
        for kind in VehicleKind::ALL {
            assert_eq!(kind.rate().id, kind);
        }
    }

    #[test]
    fn ids_are_unique_and_multipliers_positive() {
        let ids: HashSet<_> = VEHICLE_TYPE_RATES.iter().map(|rate| rate.id).collect();
        assert_eq!(ids.len(), VEHICLE_TYPE_RATES.len());
        assert!(VEHICLE_TYPE_RATES.iter().all(|rate| rate.multiplier > 0.0));
    }

    #[test]
    fn lookup_by_id_matches_parse() {
        let rate = vehicle_type_rate("motorcycle").expect("motorcycle rate");
        assert_eq!(rate.multiplier, 0.6);
        assert_eq!("motorcycle".parse::<VehicleKind>(), Ok(VehicleKind::Motorcycle));
    }

    #[test]
    fn unknown_id_is_not_found() {
        assert!(vehicle_type_rate("tank").is_none());
        assert_eq!(
            "Sedan".parse::<VehicleKind>(),
            Err(QuoteError::UnknownVehicleType("Sedan".to_string()))
        );
    }

    #[test]
    fn surcharge_labels_follow_multiplier() {
        assert_eq!(VehicleKind::Sedan.rate().surcharge_label(), "Standard");
        assert_eq!(VehicleKind::Suv.rate().surcharge_label(), "+15%");
        assert_eq!(VehicleKind::Motorcycle.rate().surcharge_label(), "-40%");
    }
}
