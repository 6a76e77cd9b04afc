pub mod csv_export;
pub mod csv_import;
pub mod id_generator;

pub use csv_export::render_winners_csv;
pub use csv_import::parse_employee_rows;
pub use id_generator::generate_id;
