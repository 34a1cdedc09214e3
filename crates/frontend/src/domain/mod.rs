pub mod a001_reservation;
pub mod a002_selected_product;
