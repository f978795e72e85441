pub mod get_dialogs;
