/// Visibility of a page's create/edit dialog.
///
/// Owned by the page and handed to the list it renders, so the page's action
/// button and the list's row buttons drive the same state.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DialogMode<T> {
    #[default]
    Closed,
    Add,
    Edit(T),
}

impl<T> DialogMode<T> {
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    pub fn editing(&self) -> Option<&T> {
        match self {
            Self::Edit(record) => Some(record),
            _ => None,
        }
    }
}

impl<T: crate::Resource> DialogMode<T> {
    /// Key for the form inside the dialog, so switching records re-initialises it.
    pub fn form_key(&self) -> String {
        match self {
            Self::Closed => String::new(),
            Self::Add => "new".into(),
            Self::Edit(record) => format!("edit-{}", record.id()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Brand;

    fn brand(id: &str) -> Brand {
        Brand {
            id: id.into(),
            name: "Acme".into(),
            slug: "acme".into(),
            logo_url: None,
        }
    }

    #[test]
    fn open_and_close() {
        let mut mode = DialogMode::<Brand>::default();
        assert!(!mode.is_open());
        mode = DialogMode::Add;
        assert!(mode.is_open());
        assert!(mode.editing().is_none());
        mode = DialogMode::Edit(brand("b1"));
        assert_eq!(mode.editing().map(|b| b.id.as_str()), Some("b1"));
        mode = DialogMode::Closed;
        assert!(!mode.is_open());
    }

    #[test]
    fn form_key_follows_record() {
        assert_eq!(DialogMode::<Brand>::Add.form_key(), "new");
        assert_ne!(
            DialogMode::Edit(brand("b1")).form_key(),
            DialogMode::Edit(brand("b2")).form_key()
        );
    }
}
