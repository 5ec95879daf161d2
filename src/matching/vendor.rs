//! Vendor name and id canonicalization.
//!
//! Vendors appear in pack descriptions as `"Name"`, `"Name:Id"` or even
//! `":Id"`. Several names share one numeric id (`"Freescale"` and `"NXP"` are
//! both `11`), and some ids were retired when vendors merged (`78` is now
//! `11`). [`VendorRegistry`] resolves all of these to a canonical
//! `"Name:Id"` form so that differently spelled vendor attributes match.

use crate::config::{is_vendor_id, Validatable, VendorConfig};
use crate::error::{PackMatchError, Result, VendorErrorKind};
use crate::matching::wildcard;
use crate::utils::strings::{prefix, suffix};
use std::collections::HashMap;
use std::sync::OnceLock;
use tracing::debug;

/// Delimiter between vendor name and numeric id.
pub const VENDOR_ID_DELIMITER: char = ':';

/// Vendor string used when no vendor is known.
pub const NO_VENDOR: &str = "NO_VENDOR:0";

/// Vendor name (and historical aliases) to numeric id.
const NAME_TO_ID: &[(&str, &str)] = &[
    ("NO_VENDOR", "0"),
    ("3PEAK", "177"),
    ("ABOV Semiconductor", "126"),
    ("ABOV", "126"),
    ("Acer Labs", "20"),
    ("Actel", "56"),
    ("Aeroflex UTMC", "34"),
    ("ALi", "50"),
    ("Altera", "85"),
    ("Altium", "65"),
    ("Ambiq Micro", "120"),
    ("Analog Devices", "1"),
    ("AnchorChips", "2"),
    ("ARM", "82"),
    ("ARM CMSIS", "109"),
    ("ASIX Electronics Corporation", "81"),
    ("Atmel", "3"),
    ("Microchip", "3"),
    ("Atmel Wireless & uC", "22"),
    ("AustriaMicroSystems", "84"),
    ("California Eastern Laboratories", "94"),
    ("CAST, Inc.", "55"),
    ("Chipcon", "42"),
    ("Cirrus Logic", "83"),
    ("CML Microcircuits", "45"),
    ("CORERIVER", "96"),
    ("CSR", "118"),
    ("Cybernetic Micro Systems", "29"),
    ("CybraTech", "43"),
    ("Cygnal Integrated Products", "60"),
    ("Cypress", "19"),
    ("Daewoo", "27"),
    ("Dallas Semiconductor", "4"),
    ("Dialog Semiconductor", "113"),
    ("Digi International", "87"),
    ("Digital Core Design", "58"),
    ("Dolphin", "57"),
    ("Domosys", "26"),
    ("easyplug", "61"),
    ("EM Microelectronic", "74"),
    ("Ember", "98"),
    ("Energy Micro", "21"),
    ("EnOcean", "91"),
    ("Evatronix", "64"),
    ("Freescale", "11"),
    ("Freescale Semiconductor", "11"),
    ("Freescale Semiconductors", "11"),
    ("Fujitsu", "19"),
    ("Fujitsu Semiconductor", "19"),
    ("Fujitsu Semiconductors", "19"),
    ("Generic", "5"),
    ("Genesis Microchip", "53"),
    ("GigaDevice", "123"),
    ("Goal Semiconductor", "77"),
    ("Goodix", "155"),
    ("Handshake Solutions", "71"),
    ("Hilscher", "88"),
    ("Holtek", "106"),
    ("Honeywell", "36"),
    ("Hynix Semiconductor", "6"),
    ("Hyundai", "35"),
    ("Infineon", "7"),
    ("InnovASIC", "38"),
    ("Intel", "8"),
    ("ISSI", "9"),
    ("Kawasaki", "49"),
    ("Kionix", "127"),
    ("Lapis Semiconductor", "10"),
    ("LAPIS Technology", "10"),
    ("Luminary Micro", "76"),
    ("Maxim", "23"),
    ("MediaTek", "129"),
    ("MegaChips", "128"),
    ("Megawin", "70"),
    ("Mentor Graphics Co.", "24"),
    ("Micronas", "30"),
    ("Microsemi", "112"),
    ("Milandr", "99"),
    ("milandr", "99"),
    ("MindMotion", "132"),
    ("MXIC", "40"),
    ("Myson Technology", "32"),
    ("NetSilicon", "67"),
    ("Nordic Semiconductor", "54"),
    ("Nuvoton", "18"),
    ("NXP", "11"),
    ("NXP (founded by Philips)", "11"),
    ("OKI SEMICONDUCTOR CO.,LTD.", "108"),
    ("onsemi", "141"),
    ("ONSemiconductor", "141"),
    ("Oregano Systems", "44"),
    ("PalmChip", "105"),
    ("Philips", "79"),
    ("RadioPulse", "86"),
    ("Ramtron", "41"),
    ("Realtek", "124"),
    ("Realtek Semiconductor", "124"),
    ("Redpine Signals", "125"),
    ("RDC Semiconductor", "73"),
    ("ROHM", "103"),
    ("Samsung", "47"),
    ("Sanyo", "46"),
    ("Shanghai Huahong IC", "66"),
    ("Sharp", "39"),
    ("Siemens", "25"),
    ("Sigma Designs", "111"),
    ("Silicon Labs", "21"),
    ("Silicon Laboratories, Inc.", "21"),
    ("Siliconians", "28"),
    ("SMSC", "33"),
    ("Socle Technology Corp.", "95"),
    ("SONiX", "110"),
    ("Spansion", "19"),
    ("SST", "12"),
    ("ST", "13"),
    ("STMicroelectronics", "13"),
    ("Sunrise Micro Devices", "121"),
    ("SyncMOS", "63"),
    ("Synopsys", "37"),
    ("Syntek Semiconductor Co., Ltd.", "62"),
    ("TDK", "75"),
    ("Tekmos", "80"),
    ("Temic", "15"),
    ("Teridian Semiconductor Corp.", "14"),
    ("TI", "16"),
    ("Texas Instruments", "16"),
    ("Tezzaron Semiconductor", "68"),
    ("Toshiba", "92"),
    ("Triad Semiconductor", "104"),
    ("Triscend", "17"),
    ("Uniband Electronic Corp.", "101"),
    ("Vitesse", "72"),
    ("Winbond", "93"),
    ("WiNEDGE", "48"),
    ("WIZnet", "102"),
    ("Zensys", "59"),
    ("Zilog", "89"),
    ("Zylogic Semiconductor Corp.", "69"),
    ("Renesas", "117"),
    ("AutoChips", "150"),
];

/// Numeric id to canonical display name.
const ID_TO_NAME: &[(&str, &str)] = &[
    ("0", "NO_VENDOR"),
    ("177", "3PEAK"),
    ("126", "ABOV Semiconductor"),
    ("20", "Acer Labs"),
    ("56", "Actel"),
    ("34", "Aeroflex UTMC"),
    ("50", "ALi"),
    ("85", "Altera"),
    ("65", "Altium"),
    ("120", "Ambiq Micro"),
    ("1", "Analog Devices"),
    ("2", "AnchorChips"),
    ("82", "ARM"),
    ("109", "ARM CMSIS"),
    ("81", "ASIX Electronics Corporation"),
    ("3", "Microchip"),
    ("22", "Atmel Wireless & uC"),
    ("84", "AustriaMicroSystems"),
    ("94", "California Eastern Laboratories"),
    ("55", "CAST, Inc."),
    ("42", "Chipcon"),
    ("83", "Cirrus Logic"),
    ("45", "CML Microcircuits"),
    ("96", "CORERIVER"),
    ("118", "CSR"),
    ("29", "Cybernetic Micro Systems"),
    ("43", "CybraTech"),
    ("60", "Cygnal Integrated Products"),
    ("19", "Cypress"),
    ("27", "Daewoo"),
    ("4", "Dallas Semiconductor"),
    ("113", "Dialog Semiconductor"),
    ("87", "Digi International"),
    ("58", "Digital Core Design"),
    ("57", "Dolphin"),
    ("26", "Domosys"),
    ("61", "easyplug"),
    ("74", "EM Microelectronic"),
    ("98", "Ember"),
    ("97", "Silicon Labs"),
    ("91", "EnOcean"),
    ("64", "Evatronix"),
    ("78", "NXP"),
    ("100", "Cypress"),
    ("114", "Cypress"),
    ("5", "Generic"),
    ("53", "Genesis Microchip"),
    ("123", "GigaDevice"),
    ("77", "Goal Semiconductor"),
    ("155", "Goodix"),
    ("71", "Handshake Solutions"),
    ("88", "Hilscher"),
    ("106", "Holtek"),
    ("36", "Honeywell"),
    ("6", "Hynix Semiconductor"),
    ("35", "Hyundai"),
    ("7", "Infineon"),
    ("38", "InnovASIC"),
    ("8", "Intel"),
    ("9", "ISSI"),
    ("49", "Kawasaki"),
    ("127", "Kionix"),
    ("10", "LAPIS Technology"),
    ("76", "Luminary Micro"),
    ("23", "Maxim"),
    ("129", "MediaTek"),
    ("128", "MegaChips"),
    ("70", "Megawin"),
    ("24", "Mentor Graphics Co."),
    ("30", "Micronas"),
    ("112", "Microsemi"),
    ("99", "Milandr"),
    ("132", "MindMotion"),
    ("40", "MXIC"),
    ("32", "Myson Technology"),
    ("67", "NetSilicon"),
    ("54", "Nordic Semiconductor"),
    ("18", "Nuvoton"),
    ("11", "NXP"),
    ("108", "OKI SEMICONDUCTOR CO.,LTD."),
    ("141", "onsemi"),
    ("44", "Oregano Systems"),
    ("105", "PalmChip"),
    ("79", "Philips"),
    ("86", "RadioPulse"),
    ("41", "Ramtron"),
    ("124", "Realtek Semiconductor"),
    ("125", "Redpine Signals"),
    ("73", "RDC Semiconductor"),
    ("103", "ROHM"),
    ("47", "Samsung"),
    ("46", "Sanyo"),
    ("66", "Shanghai Huahong IC"),
    ("39", "Sharp"),
    ("25", "Siemens"),
    ("111", "Sigma Designs"),
    ("21", "Silicon Labs"),
    ("28", "Siliconians"),
    ("33", "SMSC"),
    ("95", "Socle Technology Corp."),
    ("110", "SONiX"),
    ("12", "SST"),
    ("13", "STMicroelectronics"),
    ("121", "Sunrise Micro Devices"),
    ("63", "SyncMOS"),
    ("37", "Synopsys"),
    ("62", "Syntek Semiconductor Co., Ltd."),
    ("75", "TDK"),
    ("80", "Tekmos"),
    ("15", "Temic"),
    ("14", "Teridian Semiconductor Corp."),
    ("16", "Texas Instruments"),
    ("68", "Tezzaron Semiconductor"),
    ("92", "Toshiba"),
    ("104", "Triad Semiconductor"),
    ("17", "Triscend"),
    ("101", "Uniband Electronic Corp."),
    ("72", "Vitesse"),
    ("93", "Winbond"),
    ("48", "WiNEDGE"),
    ("102", "WIZnet"),
    ("122", "WIZnet"),
    ("59", "Zensys"),
    ("89", "Zilog"),
    ("69", "Zylogic Semiconductor Corp."),
    ("117", "Renesas"),
    ("150", "AutoChips"),
];

/// Retired ids and the id that replaced them.
const LEGACY_IDS: &[(&str, &str)] = &[
    ("97", "21"),  // Energy Micro -> Silicon Labs
    ("100", "19"), // Spansion -> Cypress
    ("114", "19"), // Fujitsu -> Cypress
    ("78", "11"),  // Freescale -> NXP
];

static SHARED: OnceLock<VendorRegistry> = OnceLock::new();

/// Immutable vendor lookup tables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VendorRegistry {
    name_to_id: HashMap<String, String>,
    id_to_name: HashMap<String, String>,
    legacy_ids: HashMap<String, String>,
}

impl VendorRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the built-in vendor tables.
    #[must_use]
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for (name, id) in NAME_TO_ID {
            registry.add_alias(name, id);
        }
        for (id, name) in ID_TO_NAME {
            registry.set_name(id, name);
        }
        for (old, new) in LEGACY_IDS {
            registry.add_legacy_id(old, new);
        }
        registry
    }

    /// Build a registry from configuration, on top of the built-ins unless
    /// `use_builtins` is off.
    pub fn from_config(config: &VendorConfig) -> Result<Self> {
        if let Some(error) = config.validate().into_iter().next() {
            return Err(PackMatchError::config(error.to_string()));
        }
        let mut registry = if config.use_builtins {
            Self::builtin()
        } else {
            Self::new()
        };
        for (name, id) in &config.aliases {
            registry.add_alias(name, id);
        }
        for (id, name) in &config.names {
            registry.set_name(id, name);
        }
        for (old, new) in &config.legacy_ids {
            registry.add_legacy_id(old, new);
        }
        debug!(
            "Vendor registry: {} names, {} ids, {} legacy ids",
            registry.name_to_id.len(),
            registry.id_to_name.len(),
            registry.legacy_ids.len()
        );
        Ok(registry)
    }

    /// The process-wide registry.
    ///
    /// Falls back to [`VendorRegistry::builtin`] if nothing was installed.
    pub fn shared() -> &'static Self {
        SHARED.get_or_init(Self::builtin)
    }

    /// Install the process-wide registry. Must run before the first lookup.
    pub fn install(registry: Self) -> Result<()> {
        SHARED.set(registry).map_err(|_| {
            PackMatchError::vendor("install", VendorErrorKind::AlreadyInitialized)
        })
    }

    /// Register `name` as a spelling of vendor `id`.
    pub fn add_alias(&mut self, name: &str, id: &str) {
        self.name_to_id.insert(name.to_string(), id.to_string());
    }

    /// Set the canonical display name of vendor `id`.
    pub fn set_name(&mut self, id: &str, name: &str) {
        self.id_to_name.insert(id.to_string(), name.to_string());
    }

    /// Map retired id `old` onto `new`.
    pub fn add_legacy_id(&mut self, old: &str, new: &str) {
        self.legacy_ids.insert(old.to_string(), new.to_string());
    }

    /// Numeric id registered for a vendor name.
    #[must_use]
    pub fn id_for_name(&self, name: &str) -> Option<&str> {
        self.name_to_id.get(name).map(String::as_str)
    }

    /// Canonical display name for a numeric id.
    #[must_use]
    pub fn name_for_id(&self, id: &str) -> Option<&str> {
        self.id_to_name.get(id).map(String::as_str)
    }

    /// The current id for `id`, following the legacy table once.
    #[must_use]
    pub fn official_id<'a>(&'a self, id: &'a str) -> &'a str {
        self.legacy_ids.get(id).map_or(id, String::as_str)
    }

    /// All names registered for the same id as `name`, sorted.
    #[must_use]
    pub fn aliases_of(&self, name: &str) -> Vec<&str> {
        let Some(id) = self.id_for_name(name) else {
            return Vec::new();
        };
        let mut aliases: Vec<&str> = self
            .name_to_id
            .iter()
            .filter(|(_, other)| other.as_str() == id)
            .map(|(alias, _)| alias.as_str())
            .collect();
        aliases.sort_unstable();
        aliases
    }

    /// True if `name` is the display name of its own id.
    #[must_use]
    pub fn is_canonical_name(&self, name: &str) -> bool {
        self.id_for_name(name)
            .and_then(|id| self.name_for_id(id))
            .is_some_and(|canonical| canonical == name)
    }

    /// Canonical display name for a vendor string.
    ///
    /// An explicit id wins; if it is unknown the name part is resolved
    /// instead. Unknown vendors keep their name part, so the result is
    /// stable when fed back in.
    #[must_use]
    pub fn canonical_name(&self, vendor: &str) -> String {
        let name = prefix(vendor, VENDOR_ID_DELIMITER);
        let id = suffix(vendor, VENDOR_ID_DELIMITER);

        let by_id = (!id.is_empty())
            .then(|| self.name_for_id(id))
            .flatten();
        let by_name = || self.id_for_name(name).and_then(|id| self.name_for_id(id));

        by_id.or_else(by_name).unwrap_or(name).to_string()
    }

    /// Resolve a vendor string to `"Name:Id"`.
    ///
    /// Explicit ids are mapped through the legacy table first; without an id
    /// the name is looked up. Vendors that cannot be resolved are returned
    /// unchanged.
    #[must_use]
    pub fn full_vendor_string(&self, vendor: &str) -> String {
        let name = prefix(vendor, VENDOR_ID_DELIMITER);
        let id = suffix(vendor, VENDOR_ID_DELIMITER);
        let id = if id.is_empty() {
            self.id_for_name(name)
        } else {
            Some(self.official_id(id))
        };

        match id.and_then(|id| self.name_for_id(id).map(|canonical| (canonical, id))) {
            Some((canonical, id)) => format!("{canonical}{VENDOR_ID_DELIMITER}{id}"),
            None => vendor.to_string(),
        }
    }

    /// True if two vendor strings denote the same vendor.
    ///
    /// When both sides carry an id only the ids are compared (directly or
    /// after legacy resolution). Otherwise both sides are resolved and their
    /// names are wildcard-matched.
    #[must_use]
    pub fn matches(&self, vendor1: &str, vendor2: &str) -> bool {
        if vendor1 == vendor2 {
            return true;
        }
        let id1 = suffix(vendor1, VENDOR_ID_DELIMITER);
        let id2 = suffix(vendor2, VENDOR_ID_DELIMITER);
        if !id1.is_empty()
            && !id2.is_empty()
            && (id1 == id2 || self.official_id(id1) == self.official_id(id2))
        {
            return true;
        }
        let full1 = self.full_vendor_string(vendor1);
        let full2 = self.full_vendor_string(vendor2);
        wildcard::matches(
            prefix(&full1, VENDOR_ID_DELIMITER),
            prefix(&full2, VENDOR_ID_DELIMITER),
        )
    }

    /// Number of registered vendor names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.name_to_id.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name_to_id.is_empty()
    }
}

/// Checks that `id` looks like a vendor id.
pub fn validate_vendor_id(id: &str) -> Result<()> {
    if is_vendor_id(id) {
        Ok(())
    } else {
        Err(PackMatchError::vendor(
            "vendor id",
            VendorErrorKind::InvalidId(id.to_string()),
        ))
    }
}
