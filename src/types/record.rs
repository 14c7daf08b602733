//! Flat output rows.
//!
//! A [`FlatRecord`] is one denormalized (host, port, service) combination.
//! Records are built during traversal and written straight out; nothing
//! keeps a collection of them.

/// Service descriptor attached to a port. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceInfo {
    pub name: Option<String>,
    pub product: Option<String>,
    pub version: Option<String>,
    pub extra_info: Option<String>,
}

/// One output row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatRecord {
    /// Primary address of the host.
    pub host: Option<String>,
    /// First hostname label of the host.
    pub hostname: Option<String>,
    /// Raw `portid` attribute, copied as-is.
    pub port: Option<String>,
    pub service: ServiceInfo,
}

impl FlatRecord {
    /// Column labels, in positional order.
    pub const HEADER: [&'static str; 7] = [
        "Host",
        "hostname",
        "Port",
        "Service",
        "Product",
        "Version",
        "ExtraInfo",
    ];

    /// Positional fields matching [`FlatRecord::HEADER`]. Absent values become `""`.
    pub fn to_row(&self) -> [String; 7] {
        let text = |v: &Option<String>| v.clone().unwrap_or_default();

        [
            text(&self.host),
            text(&self.hostname),
            text(&self.port),
            text(&self.service.name),
            text(&self.service.product),
            text(&self.service.version),
            text(&self.service.extra_info),
        ]
    }
}
