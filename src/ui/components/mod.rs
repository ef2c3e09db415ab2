pub mod kpi_card;
pub mod product_table;
pub mod result_banner;
pub mod toast;
pub mod validity_badge;
