pub mod hints;
pub mod icon;
pub mod money;
pub mod table_header;
pub mod table_row;
pub mod virtual_list;
