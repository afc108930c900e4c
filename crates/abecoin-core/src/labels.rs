//! Column and concept labels shown to borrowers (Spanish, soles).

pub const CURRENCY_SYMBOL: &str = "S/";

/// Status text printed for an installment that has not been paid.
pub const STATUS_PENDING: &str = "PENDIENTE";

/// Date layout used on the printed schedule (day/month/year).
pub const DUE_DATE_FORMAT: &str = "%d/%m/%Y";

pub const SCHEDULE_SHEET: &str = "Cronograma";
pub const SUMMARY_SHEET: &str = "Resumen";

pub const ROW_HEADERS: [&str; 9] = [
    "N° Cuota",
    "Fecha Venc.",
    "Saldo Capital",
    "Amortización",
    "Interés",
    "Cuota Base",
    "Degravamen",
    "Cuota Final",
    "Estado",
];

pub const SUMMARY_HEADERS: [&str; 2] = ["Concepto", "Valor"];

pub const SUMMARY_NAME: &str = "Nombre";
pub const SUMMARY_DOCUMENT_ID: &str = "DNI";
pub const SUMMARY_ADDRESS: &str = "Dirección";
pub const SUMMARY_PRINCIPAL: &str = "Capital Inicial (S/)";
pub const SUMMARY_WEEKLY_RATE: &str = "Tasa semanal (%)";
pub const SUMMARY_INSTALLMENTS: &str = "N° Cuotas";
pub const SUMMARY_TOTAL_INTEREST: &str = "Interés Total (S/)";
pub const SUMMARY_TOTAL_INSURANCE: &str = "Degravamen Total (S/)";
pub const SUMMARY_TOTAL_PAYABLE: &str = "Total a Pagar (S/)";

/// Stem of downloaded schedule files: `cronograma_<dni>.<ext>`.
pub const EXPORT_FILE_STEM: &str = "cronograma";
