use fractic_server_error::{define_client_error, define_internal_error};

// IO-related.
define_client_error!(ReadError, "Error reading file.");

// Parsing-related.
define_client_error!(InvalidCsv, "Invalid CSV format.");
define_client_error!(InvalidCsvContent, "Invalid CSV content: {details}.", { details: &str });
define_client_error!(InvalidRon, "Invalid {ron_type} (invalid RON format).", { ron_type: &str });
define_client_error!(InvalidJson, "Invalid {json_type} (invalid JSON format).", { json_type: &str });
define_client_error!(InvalidIsoDate, "Invalid ISO date: {date}.", { date: &str });
define_client_error!(InvalidAmount, "Invalid amount: '{value}'.", { value: &str });
define_client_error!(
    InvalidCompetencePeriod,
    "Invalid competence period: '{value}' (expected MM/YYYY).",
    { value: &str }
);
define_client_error!(
    InvalidReferenceMonth,
    "Invalid reference month: '{value}' (expected YYYY-MM).",
    { value: &str }
);
define_client_error!(
    InvalidBoolean,
    "Invalid boolean flag: '{value}'.",
    { value: &str }
);
define_client_error!(InvalidConfig, "Invalid configuration: {details}.", { details: &str });

// Validation.
define_client_error!(
    ValidationError,
    "Invalid value for '{field}': {details}.",
    { field: &str, details: &str }
);

// Date arithmetic.
define_internal_error!(
    DateOutOfRange,
    "Date arithmetic left the supported calendar range (year: {year}, month: {month}).",
    { year: i32, month: u32 }
);

// Authorization.
define_client_error!(
    Forbidden,
    "Role {role} is not allowed to {capability}.",
    { role: &str, capability: &str }
);
