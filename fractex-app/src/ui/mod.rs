mod controls;
mod dialogs;
mod display;
