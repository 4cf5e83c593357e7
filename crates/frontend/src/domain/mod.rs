pub mod a001_division_branch;
pub mod a002_department;
pub mod a003_sub_department;
pub mod a004_branch_department_link;
pub mod a005_data_entry;
pub mod a006_logo;
