// ==========================================
// 防火隔离带规划系统 - 装备目录导入器
// ==========================================
// 职责: 把目录文件（CSV / Excel / JSON）映射为 EquipmentSpec 列表
// 红线: 只做格式映射；数值合法性（正数等）留给引擎校验器，
//       保证单条非法规格不会让整份目录导入失败
// ==========================================

use crate::domain::equipment::{EquipmentKind, EquipmentSpec};
use crate::domain::types::{EquipmentType, TerrainLevel, VegetationClass};
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::file_parser::{RawRecord, UniversalFileParser};
use std::collections::BTreeSet;
use std::path::Path;
use std::str::FromStr;
use tracing::{info, instrument};

/// 列表单元格分隔符
const LIST_SEPARATORS: [char; 3] = ['|', ';', ','];

// ==========================================
// 归一化列名
// ==========================================
pub mod columns {
    pub const ID: &str = "id";
    pub const NAME: &str = "name";
    pub const TYPE: &str = "type";
    pub const ALLOWED_TERRAIN: &str = "allowedterrain";
    pub const ALLOWED_VEGETATION: &str = "allowedvegetation";
    pub const CLEARING_RATE: &str = "clearingrate";
    pub const COST_PER_HOUR: &str = "costperhour";
    pub const MAX_SLOPE: &str = "maxslope";
    pub const DROP_LENGTH: &str = "droplength";
    pub const TURNAROUND_MINUTES: &str = "turnaroundminutes";
    pub const CREW_SIZE: &str = "crewsize";
    pub const CLEARING_RATE_PER_PERSON: &str = "clearingrateperperson";
    pub const DESCRIPTION: &str = "description";
}

// ==========================================
// EquipmentCatalogueImporter - 装备目录导入器
// ==========================================
pub struct EquipmentCatalogueImporter;

impl EquipmentCatalogueImporter {
    /// 按扩展名导入目录文件
    ///
    /// # 返回
    /// - Ok(Vec<EquipmentSpec>): 按文件顺序排列的装备规格
    /// - Err(ImportError): 文件缺失、格式不支持、解析或字段映射失败
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn import_file<P: AsRef<Path>>(path: P) -> ImportResult<Vec<EquipmentSpec>> {
        let path = path.as_ref();
        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));

        let specs = if is_json {
            if !path.exists() {
                return Err(ImportError::FileNotFound(path.display().to_string()));
            }
            let raw = std::fs::read_to_string(path)?;
            Self::import_json(&raw)?
        } else {
            let records = UniversalFileParser.parse(path)?;
            Self::map_records(&records)?
        };

        info!(count = specs.len(), "装备目录导入完成");
        Ok(specs)
    }

    /// 解析 JSON 目录（EquipmentSpec 数组，字段为 camelCase）
    pub fn import_json(raw: &str) -> ImportResult<Vec<EquipmentSpec>> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn map_records(records: &[RawRecord]) -> ImportResult<Vec<EquipmentSpec>> {
        records.iter().map(Self::map_record).collect()
    }

    /// 单行记录 → EquipmentSpec
    pub fn map_record(record: &RawRecord) -> ImportResult<EquipmentSpec> {
        let row = record.row;

        let type_raw = record
            .get(columns::TYPE)
            .ok_or_else(|| ImportError::FieldMappingError {
                row,
                message: "type is required".to_string(),
            })?;
        let equipment_type =
            EquipmentType::parse(type_raw).ok_or_else(|| ImportError::FieldMappingError {
                row,
                message: format!("unknown equipment type '{}'", type_raw),
            })?;

        let kind = match equipment_type {
            EquipmentType::Machinery => EquipmentKind::Machinery {
                clearing_rate: parse_number(record, columns::CLEARING_RATE)?,
                max_slope: parse_number(record, columns::MAX_SLOPE)?,
            },
            EquipmentType::Aircraft => EquipmentKind::Aircraft {
                drop_length: parse_number(record, columns::DROP_LENGTH)?,
                turnaround_minutes: parse_number(record, columns::TURNAROUND_MINUTES)?,
            },
            EquipmentType::HandCrew => EquipmentKind::HandCrew {
                crew_size: parse_number(record, columns::CREW_SIZE)?,
                clearing_rate_per_person: parse_number(record, columns::CLEARING_RATE_PER_PERSON)?,
            },
        };

        Ok(EquipmentSpec {
            id: record.get(columns::ID).unwrap_or_default().to_string(),
            name: record.get(columns::NAME).unwrap_or_default().to_string(),
            allowed_terrain: parse_list(record, columns::ALLOWED_TERRAIN, TerrainLevel::parse)?,
            allowed_vegetation: parse_list(
                record,
                columns::ALLOWED_VEGETATION,
                VegetationClass::parse,
            )?,
            cost_per_hour: parse_number(record, columns::COST_PER_HOUR)?,
            description: record.get(columns::DESCRIPTION).map(|s| s.to_string()),
            kind,
        })
    }
}

fn parse_number<T: FromStr>(record: &RawRecord, field: &str) -> ImportResult<Option<T>> {
    match record.get(field) {
        None => Ok(None),
        Some(raw) => raw
            .parse::<T>()
            .map(Some)
            .map_err(|_| ImportError::TypeConversionError {
                row: record.row,
                field: field.to_string(),
                message: format!("'{}' is not a valid number", raw),
            }),
    }
}

fn parse_list<T: Ord>(
    record: &RawRecord,
    field: &str,
    parse: fn(&str) -> Option<T>,
) -> ImportResult<BTreeSet<T>> {
    let raw = match record.get(field) {
        Some(raw) => raw,
        None => return Ok(BTreeSet::new()),
    };

    raw.split(LIST_SEPARATORS.as_slice())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|item| {
            parse(item).ok_or_else(|| ImportError::TypeConversionError {
                row: record.row,
                field: field.to_string(),
                message: format!("unknown value '{}'", item),
            })
        })
        .collect()
}
