//! Image templates - Catalog entries describing an LXC or VM script

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::error::Violation;

/// Kind of image, kept open-ended so unknown catalog values survive
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ImageType {
    Lxc,
    Vm,
    Other(String),
}

impl ImageType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Lxc => "LXC",
            Self::Vm => "VM",
            Self::Other(other) => other,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<String> for ImageType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "LXC" => Self::Lxc,
            "VM" => Self::Vm,
            _ => Self::Other(value),
        }
    }
}

impl From<&str> for ImageType {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<ImageType> for String {
    fn from(value: ImageType) -> Self {
        match value {
            ImageType::Other(other) => other,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for ImageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A predefined image with its default allocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageTemplate {
    /// Lower-case identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Image kind
    #[serde(rename = "type")]
    pub image_type: ImageType,
    /// Default vCPU count
    pub cpu: u32,
    /// Default RAM in MB
    pub ram: u32,
    /// Default disk in MB
    pub disk: u32,
}

impl ImageTemplate {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        image_type: impl Into<ImageType>,
        cpu: u32,
        ram: u32,
        disk: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            image_type: image_type.into(),
            cpu,
            ram,
            disk,
        }
    }

    /// Composite key shown in search and used for lookup
    pub fn search_label(&self) -> String {
        format!("{} {}", self.name, self.image_type)
    }

    pub fn matches_label(&self, label: &str) -> bool {
        label
            .strip_prefix(self.name.as_str())
            .and_then(|rest| rest.strip_prefix(' '))
            .is_some_and(|rest| rest == self.image_type.as_str())
    }

    /// Build a template from one raw catalog entry
    ///
    /// Numbers are read as signed integers so negative or oversized values
    /// surface as constraint violations rather than parse failures.
    pub fn from_value(entry: &Value) -> Result<Self, Violation> {
        let fields = entry.as_object().ok_or(Violation::NotAnObject)?;

        let id = string_field(fields, "id")?;
        let name = string_field(fields, "name")?;
        let image_type = string_field(fields, "type")?;
        let cpu = integer_field(fields, "cpu")?;
        let ram = integer_field(fields, "ram")?;
        let disk = integer_field(fields, "disk")?;

        check_allocation(cpu, ram, disk)?;

        Ok(Self::new(
            id,
            name,
            image_type,
            narrow("cpu", cpu)?,
            narrow("ram", ram)?,
            narrow("disk", disk)?,
        ))
    }

    /// Check the default allocation against catalog constraints
    pub fn check(&self) -> Result<(), Violation> {
        check_allocation(self.cpu.into(), self.ram.into(), self.disk.into())
    }
}

fn check_allocation(cpu: i64, ram: i64, disk: i64) -> Result<(), Violation> {
    if !(1..=4).contains(&cpu) {
        return Err(Violation::CpuOutOfRange(cpu));
    }
    if ram <= 0 || ram % 256 != 0 {
        return Err(Violation::RamNotAligned(ram));
    }
    if disk <= 0 || disk % 512 != 0 {
        return Err(Violation::DiskNotAligned(disk));
    }
    Ok(())
}

fn field<'a>(fields: &'a Map<String, Value>, name: &'static str) -> Result<&'a Value, Violation> {
    fields
        .get(name)
        .filter(|value| !value.is_null())
        .ok_or(Violation::MissingField(name))
}

fn string_field(fields: &Map<String, Value>, name: &'static str) -> Result<String, Violation> {
    field(fields, name)?
        .as_str()
        .map(str::to_string)
        .ok_or(Violation::InvalidField {
            field: name,
            expected: "a string",
        })
}

fn integer_field(fields: &Map<String, Value>, name: &'static str) -> Result<i64, Violation> {
    field(fields, name)?.as_i64().ok_or(Violation::InvalidField {
        field: name,
        expected: "an integer",
    })
}

fn narrow(field: &'static str, value: i64) -> Result<u32, Violation> {
    u32::try_from(value).map_err(|_| Violation::TooLarge { field, value })
}
