/// Currency every amount is expressed in after normalization.
pub const REFERENCE_CURRENCY: &str = "EUR";

/// Column carrying the region label on every result row.
pub const REGION_COLUMN: &str = "region_name";

/// Column stamped by the currency normalizer.
pub const CURRENCY_COLUMN: &str = "currency";

/// Amount columns of a per-employee compensation record.
pub const COMPENSATION_AMOUNT_COLUMNS: [&str; 3] = ["yearly_salary", "bonus", "total_compensation"];

/// Lower bound of the department change window when none is requested.
pub const DEFAULT_FROM_YEAR: i32 = 2005;

/// Upper bound of the department change window when none is requested.
pub const DEFAULT_TO_YEAR: i32 = 2018;

/// Number of top earners listed per department by default.
pub const DEFAULT_TOP_PAID: i64 = 5;

/// Decimal places kept for averaged amounts.
pub const AVERAGE_DECIMAL_PRECISION: u32 = 2;
