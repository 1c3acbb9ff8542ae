pub mod file_dialog;
