pub mod employee_row;
