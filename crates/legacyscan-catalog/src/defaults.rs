//! Built-in catalog: S/4HANA credit management simplification items.

use legacyscan_types::Category;

const UKM_ITEM_NOTE: &str = "with relevant fields of UKM_ITEM (per SAP Note 2706489)";
const UKM_CASE: &str = "Replace with UKM_CASE (OSS Note 2270544)";

/// `(name, category, remediation)`; `None` marks an object without a successor.
pub(crate) fn credit_management_entries() -> Vec<(&'static str, Category, Option<String>)> {
    vec![
        (
            "S066",
            Category::Table,
            Some(format!("Replace S066 table {UKM_ITEM_NOTE}")),
        ),
        (
            "S067",
            Category::Table,
            Some(format!("Replace S067 table {UKM_ITEM_NOTE}")),
        ),
        ("VKMI", Category::Table, None),
        ("VAKCR", Category::Table, None),
        ("VKM2", Category::Transaction, Some(UKM_CASE.to_string())),
        ("VKM3", Category::Transaction, Some(UKM_CASE.to_string())),
        ("VKM5", Category::Transaction, Some(UKM_CASE.to_string())),
        ("SD_VKMLOG_SHOW", Category::Program, None),
        ("VAKCR_REBUILD", Category::Program, None),
        ("RVKRED03", Category::Program, None),
        ("RVKRED04", Category::Program, None),
        ("RVKRED05", Category::Program, None),
        ("CL_CRED_VAL_LOG", Category::Class, None),
    ]
}
