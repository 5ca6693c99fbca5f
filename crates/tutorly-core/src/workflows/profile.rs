//! Professor profile editing.
//!
//! The edit page sends only the fields that differ from what was loaded.
//! `ProfileChanges::diff` builds that partial payload from the form.

/// Profile as stored by the backend.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfessorProfile {
    pub name: String,
    pub contact: String,
    /// Empty when no photo is set.
    pub photo_url: String,
    pub biography: String,
    pub price: f64,
    pub subjects: Vec<u64>,
}

/// Raw field values of the edit form, as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub name: String,
    pub contact: String,
    pub photo_url: String,
    pub biography: String,
    pub price: String,
    /// Checked subject ids, in checkbox order.
    pub subjects: Vec<u64>,
}

impl From<&ProfessorProfile> for ProfileForm {
    fn from(profile: &ProfessorProfile) -> Self {
        Self {
            name: profile.name.clone(),
            contact: profile.contact.clone(),
            photo_url: profile.photo_url.clone(),
            biography: profile.biography.clone(),
            price: profile.price.to_string(),
            subjects: profile.subjects.clone(),
        }
    }
}

/// Partial update payload. `None` means "unchanged".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileChanges {
    pub name: Option<String>,
    pub contact: Option<String>,
    /// `Some(None)` clears the photo.
    pub photo_url: Option<Option<String>>,
    pub biography: Option<String>,
    pub price: Option<f64>,
    pub subjects: Option<Vec<u64>>,
}

impl ProfileChanges {
    /// Compares the form against the loaded profile.
    ///
    /// Name and contact cannot be blanked. A blank or invalid price is
    /// ignored. Subjects compare as sets.
    pub fn diff(initial: &ProfessorProfile, form: &ProfileForm) -> Self {
        let mut changes = Self::default();

        let name = form.name.trim();
        if !name.is_empty() && name != initial.name {
            changes.name = Some(name.to_string());
        }

        let contact = form.contact.trim();
        if !contact.is_empty() && contact != initial.contact {
            changes.contact = Some(contact.to_string());
        }

        let photo_url = form.photo_url.trim();
        if photo_url != initial.photo_url {
            changes.photo_url = Some((!photo_url.is_empty()).then(|| photo_url.to_string()));
        }

        let biography = form.biography.trim();
        if biography != initial.biography {
            changes.biography = Some(biography.to_string());
        }

        if let Ok(price) = form.price.trim().parse::<f64>()
            && price.is_finite()
            && price >= 0.0
            && (price - initial.price).abs() > f64::EPSILON
        {
            changes.price = Some(price);
        }

        if !same_members(&form.subjects, &initial.subjects) {
            changes.subjects = Some(form.subjects.clone());
        }

        changes
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Applies a payload the backend accepted.
    pub fn apply_to(&self, profile: &mut ProfessorProfile) {
        if let Some(name) = &self.name {
            profile.name.clone_from(name);
        }
        if let Some(contact) = &self.contact {
            profile.contact.clone_from(contact);
        }
        if let Some(photo_url) = &self.photo_url {
            profile.photo_url = photo_url.clone().unwrap_or_default();
        }
        if let Some(biography) = &self.biography {
            profile.biography.clone_from(biography);
        }
        if let Some(price) = self.price {
            profile.price = price;
        }
        if let Some(subjects) = &self.subjects {
            profile.subjects.clone_from(subjects);
        }
    }
}

/// Order-insensitive comparison of id lists.
pub fn same_members(a: &[u64], b: &[u64]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut a = a.to_vec();
    let mut b = b.to_vec();
    a.sort_unstable();
    b.sort_unstable();
    a == b
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carla() -> ProfessorProfile {
        ProfessorProfile {
            name: "Carla".to_string(),
            contact: "(11) 98765-4321".to_string(),
            photo_url: "https://tutorly.dev/carla.png".to_string(),
            biography: "Professora de matemática.".to_string(),
            price: 80.0,
            subjects: vec![1, 2],
        }
    }

    #[test]
    fn test_same_members_ignores_order() {
        assert!(same_members(&[2, 1], &[1, 2]));
        assert!(same_members(&[], &[]));
        assert!(!same_members(&[1], &[1, 2]));
        assert!(!same_members(&[1, 1], &[1, 2]));
    }

    #[test]
    fn test_unchanged_form_is_empty() {
        let initial = carla();
        let mut form = ProfileForm::from(&initial);
        form.subjects = vec![2, 1];
        form.name = "  Carla ".to_string();

        assert!(ProfileChanges::diff(&initial, &form).is_empty());
    }

    #[test]
    fn test_diff_collects_only_changed_fields() {
        let initial = carla();
        let mut form = ProfileForm::from(&initial);
        form.price = "95".to_string();
        form.subjects = vec![1, 3];

        let changes = ProfileChanges::diff(&initial, &form);

        assert_eq!(
            changes,
            ProfileChanges {
                price: Some(95.0),
                subjects: Some(vec![1, 3]),
                ..ProfileChanges::default()
            }
        );
    }

    #[test]
    fn test_blank_name_and_price_are_ignored() {
        let initial = carla();
        let mut form = ProfileForm::from(&initial);
        form.name = "   ".to_string();
        form.price = String::new();

        assert!(ProfileChanges::diff(&initial, &form).is_empty());

        form.price = "-5".to_string();
        assert!(ProfileChanges::diff(&initial, &form).is_empty());

        form.price = "abc".to_string();
        assert!(ProfileChanges::diff(&initial, &form).is_empty());
    }

    #[test]
    fn test_blank_photo_clears_it() {
        let mut initial = carla();
        let mut form = ProfileForm::from(&initial);
        form.photo_url = " ".to_string();

        let changes = ProfileChanges::diff(&initial, &form);
        assert_eq!(changes.photo_url, Some(None));

        changes.apply_to(&mut initial);
        assert_eq!(initial.photo_url, "");
    }

    #[test]
    fn test_apply_then_diff_is_empty() {
        let mut initial = carla();
        let mut form = ProfileForm::from(&initial);
        form.biography = "Matemática e física.".to_string();
        form.subjects = vec![2];

        ProfileChanges::diff(&initial, &form).apply_to(&mut initial);

        assert_eq!(initial.biography, "Matemática e física.");
        assert!(ProfileChanges::diff(&initial, &form).is_empty());
    }
}
