/// Grouping and postal code columns
pub const CITY_COLUMN: &str = "City";
pub const ZIPCODE_COLUMN: &str = "Zipcode";

/// Weather measurement columns (imputation targets)
pub const WEATHER_COLUMNS: [&str; 7] = [
    "Temperature(F)",
    "Wind_Chill(F)",
    "Humidity(%)",
    "Pressure(in)",
    "Visibility(mi)",
    "Wind_Speed(mph)",
    "Precipitation(in)",
];

/// Additional numeric column coerced but never imputed
pub const DISTANCE_COLUMN: &str = "Distance(mi)";

/// Road feature flag columns
pub const BOOL_COLUMNS: [&str; 13] = [
    "Amenity",
    "Bump",
    "Crossing",
    "Give_Way",
    "Junction",
    "No_Exit",
    "Railway",
    "Roundabout",
    "Station",
    "Stop",
    "Traffic_Calming",
    "Traffic_Signal",
    "Turning_Loop",
];

/// Timestamp columns
pub const DATE_COLUMNS: [&str; 3] = ["Start_Time", "End_Time", "Weather_Timestamp"];
pub const START_TIME_COLUMN: &str = "Start_Time";

/// Coordinate columns
pub const START_LAT_COLUMN: &str = "Start_Lat";
pub const START_LNG_COLUMN: &str = "Start_Lng";
pub const END_LAT_COLUMN: &str = "End_Lat";
pub const END_LNG_COLUMN: &str = "End_Lng";

/// Coordinate bounds
pub const MIN_LATITUDE: f64 = -90.0;
pub const MAX_LATITUDE: f64 = 90.0;
pub const MIN_LONGITUDE: f64 = -180.0;
pub const MAX_LONGITUDE: f64 = 180.0;

/// Columns appended by the cleaning pipeline, in output order
pub const HAS_END_COORDINATES_COLUMN: &str = "has_end_coordinates";
pub const START_HOUR_COLUMN: &str = "start_hour";
pub const START_DATE_COLUMN: &str = "start_date";
pub const DERIVED_COLUMNS: [&str; 3] = [
    HAS_END_COORDINATES_COLUMN,
    START_HOUR_COLUMN,
    START_DATE_COLUMN,
];

/// Tokens accepted as true by the tolerant boolean coercion
pub const TRUTHY_TOKENS: [&str; 4] = ["true", "1", "t", "yes"];

/// Output value formats
pub const DATETIME_OUTPUT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const DATE_OUTPUT_FORMAT: &str = "%Y-%m-%d";

/// Processing defaults
pub const DEFAULT_CLEAN_CHUNK_SIZE: usize = 500_000;
pub const DEFAULT_SAMPLE_CHUNK_SIZE: usize = 100_000;
pub const DEFAULT_SAMPLE_SIZE: usize = 100_000;
pub const DEFAULT_RANDOM_SEED: u64 = 42;
