use serde::{Deserialize, Serialize};

use crate::error::{AmedasError, Result};

/// Column arrangement of a station's observation pages.
///
/// The two manned observatories publish wider tables than automated AMeDAS
/// sites, so the five weather columns sit at different raw indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnLayout {
    /// Manned observatory pages (仙台, 石巻).
    Observatory,
    /// Automated AMeDAS site pages.
    Amedas,
}

/// Identity of an observation site: page site code plus column layout.
///
/// The mapping from name to code is fixed source-page configuration, never
/// derived or mutated at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Station {
    pub name: &'static str,
    pub site_code: &'static str,
    pub layout: ColumnLayout,
}

/// Identity of a municipality for forecast lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct City {
    pub name: &'static str,
    pub code: u32,
    /// Forecast under the western district page rather than the eastern one.
    pub western: bool,
}

const STATIONS: &[Station] = &[
    station("気仙沼", "0242", ColumnLayout::Amedas),
    station("川渡", "0243", ColumnLayout::Amedas),
    station("築館", "0244", ColumnLayout::Amedas),
    station("志津川", "0246", ColumnLayout::Amedas),
    station("古川", "0247", ColumnLayout::Amedas),
    station("大衡", "0248", ColumnLayout::Amedas),
    station("鹿島台", "0249", ColumnLayout::Amedas),
    station("石巻", "47592", ColumnLayout::Observatory),
    station("新川", "0251", ColumnLayout::Amedas),
    station("仙台", "47590", ColumnLayout::Observatory),
    station("白石", "0256", ColumnLayout::Amedas),
    station("亘理", "0257", ColumnLayout::Amedas),
    station("米山", "1029", ColumnLayout::Amedas),
    station("塩釜", "1030", ColumnLayout::Amedas),
    station("駒ノ湯", "1126", ColumnLayout::Amedas),
    station("丸森", "1220", ColumnLayout::Amedas),
    station("名取", "1464", ColumnLayout::Amedas),
    station("蔵王", "1564", ColumnLayout::Amedas),
    station("女川", "1626", ColumnLayout::Amedas),
];

const CITIES: &[City] = &[
    city("仙台市", 4100, false),
    city("青葉区", 4101, false),
    city("宮城野区", 4102, false),
    city("若林区", 4103, false),
    city("太白区", 4104, false),
    city("泉区", 4105, true),
    city("白石市", 4206, true),
    city("角田市", 4208, false),
    city("蔵王町", 4301, true),
    city("七ヶ宿町", 4302, true),
    city("大河原町", 4321, false),
    city("村田町", 4322, false),
    city("柴田町", 4323, false),
    city("川崎町", 4324, true),
    city("丸森町", 4341, false),
    city("名取市", 4207, false),
    city("岩沼市", 4211, false),
    city("亘理町", 4361, false),
    city("山元町", 4362, false),
    city("塩釜市", 4203, false),
    city("多賀城市", 4209, false),
    city("富谷市", 4216, false),
    city("松島町", 4401, false),
    city("七ヶ浜町", 4404, false),
    city("利府町", 4406, false),
    city("大和町", 4421, true),
    city("大郷町", 4422, false),
    city("大衡村", 4424, true),
    city("大崎市", 4215, false),
    city("色麻町", 4444, true),
    city("加美町", 4445, true),
    city("涌谷町", 4501, false),
    city("美里町", 4505, false),
    city("栗原市", 4213, false),
    city("登米市", 4212, false),
    city("石巻市", 4202, false),
    city("東松島市", 4214, false),
    city("女川町", 4581, false),
    city("気仙沼市", 4205, false),
    city("南三陸町", 4606, false),
];

const fn station(name: &'static str, site_code: &'static str, layout: ColumnLayout) -> Station {
    Station {
        name,
        site_code,
        layout,
    }
}

const fn city(name: &'static str, code: u32, western: bool) -> City {
    City {
        name,
        code,
        western,
    }
}

impl Station {
    pub fn lookup(name: &str) -> Result<&'static Station> {
        STATIONS
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| AmedasError::UnknownStation(name.to_string()))
    }

    pub fn all() -> &'static [Station] {
        STATIONS
    }
}

impl City {
    pub fn lookup(name: &str) -> Result<&'static City> {
        CITIES
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| AmedasError::UnknownCity(name.to_string()))
    }

    pub fn all() -> &'static [City] {
        CITIES
    }
}
