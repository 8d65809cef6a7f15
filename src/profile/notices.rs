//! Fixed dialog texts of the profile screen, per locale.

use std::time::Duration;

use clap::ValueEnum;

use crate::dialog::{DialogOptions, Icon, InputKind};

pub const SUCCESS_TIMER: Duration = Duration::from_millis(2000);
pub const ERROR_TIMER: Duration = Duration::from_millis(1500);

const CONFIRM_COLOR: &str = "#3085d6";
const CANCEL_COLOR: &str = "#d33";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Locale {
    #[default]
    En,
    Es,
}

/// Every string the screen can show.
#[derive(Debug)]
struct Catalog {
    error_title: &'static str,
    load_failed: &'static str,
    update_title: &'static str,
    update_done: &'static str,
    update_failed: &'static str,
    delete_confirm_title: &'static str,
    delete_confirm_text: &'static str,
    delete_confirm_button: &'static str,
    delete_title: &'static str,
    delete_done: &'static str,
    delete_failed_title: &'static str,
    delete_failed: &'static str,
    password_title: &'static str,
    password_label: &'static str,
    password_placeholder: &'static str,
    password_save: &'static str,
    cancel_button: &'static str,
    password_done_title: &'static str,
    password_done: &'static str,
    password_failed: &'static str,
}

static EN: Catalog = Catalog {
    error_title: "Error",
    load_failed: "Could not load the user information",
    update_title: "Update successful",
    update_done: "Your information has been updated successfully",
    update_failed: "Could not update the information",
    delete_confirm_title: "Are you sure?",
    delete_confirm_text: "You won't be able to revert this action",
    delete_confirm_button: "Yes, delete",
    delete_title: "User deleted!",
    delete_done: "Your user has been deleted successfully",
    delete_failed_title: "Oops!",
    delete_failed: "Something went wrong",
    password_title: "Change Password",
    password_label: "New Password",
    password_placeholder: "Enter your new password",
    password_save: "Save",
    cancel_button: "Cancel",
    password_done_title: "Password Updated",
    password_done: "Your password has been updated successfully",
    password_failed: "Could not update the password",
};

static ES: Catalog = Catalog {
    error_title: "Error",
    load_failed: "No se pudo cargar la información del usuario",
    update_title: "Actualización exitosa",
    update_done: "Tu información ha sido actualizada correctamente",
    update_failed: "No se pudo actualizar la información",
    delete_confirm_title: "¿Estás seguro?",
    delete_confirm_text: "No podrás revertir esta acción",
    delete_confirm_button: "Sí, eliminar",
    delete_title: "¡Usuario eliminado!",
    delete_done: "Tu usuario ha sido eliminado correctamente",
    delete_failed_title: "Oops!",
    delete_failed: "Ha ocurrido un error",
    password_title: "Cambiar Contraseña",
    password_label: "Nueva Contraseña",
    password_placeholder: "Ingrese su nueva contraseña",
    password_save: "Guardar",
    cancel_button: "Cancelar",
    password_done_title: "Contraseña Actualizada",
    password_done: "Tu contraseña ha sido actualizada correctamente",
    password_failed: "No se pudo actualizar la contraseña",
};

/// Builds the screen's dialogs in one locale.
#[derive(Debug, Clone, Copy, Default)]
pub struct Notices {
    locale: Locale,
}

impl Notices {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    fn catalog(&self) -> &'static Catalog {
        match self.locale {
            Locale::En => &EN,
            Locale::Es => &ES,
        }
    }

    fn failure(title: &str, text: &str) -> DialogOptions {
        DialogOptions::new(title)
            .text(text)
            .icon(Icon::Error)
            .auto_dismiss(ERROR_TIMER)
    }

    fn success(title: &str, text: &str) -> DialogOptions {
        DialogOptions::new(title)
            .text(text)
            .icon(Icon::Success)
            .auto_dismiss(SUCCESS_TIMER)
    }

    pub fn load_failed(&self) -> DialogOptions {
        let c = self.catalog();
        Self::failure(c.error_title, c.load_failed)
    }

    pub fn update_succeeded(&self) -> DialogOptions {
        let c = self.catalog();
        Self::success(c.update_title, c.update_done)
    }

    pub fn update_failed(&self) -> DialogOptions {
        let c = self.catalog();
        Self::failure(c.error_title, c.update_failed)
    }

    pub fn confirm_delete(&self) -> DialogOptions {
        let c = self.catalog();
        DialogOptions::new(c.delete_confirm_title)
            .text(c.delete_confirm_text)
            .icon(Icon::Warning)
            .confirm_button(c.delete_confirm_button)
            .cancel_button(c.cancel_button)
            .button_colors(CONFIRM_COLOR, CANCEL_COLOR)
    }

    pub fn delete_succeeded(&self) -> DialogOptions {
        let c = self.catalog();
        Self::success(c.delete_title, c.delete_done)
    }

    pub fn delete_failed(&self) -> DialogOptions {
        let c = self.catalog();
        Self::failure(c.delete_failed_title, c.delete_failed)
    }

    pub fn password_prompt(&self) -> DialogOptions {
        let c = self.catalog();
        DialogOptions::new(c.password_title)
            .input(InputKind::Password, c.password_label, c.password_placeholder)
            .confirm_button(c.password_save)
            .cancel_button(c.cancel_button)
    }

    pub fn password_succeeded(&self) -> DialogOptions {
        let c = self.catalog();
        Self::success(c.password_done_title, c.password_done)
    }

    pub fn password_failed(&self) -> DialogOptions {
        let c = self.catalog();
        Self::failure(c.error_title, c.password_failed)
    }
}
