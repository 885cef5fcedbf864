use chrono::{DateTime, TimeZone};
use serde_json::Value;

use schedcast_core::compose;
use schedcast_core::errors::{ScheduleError, ScheduleResult};
use schedcast_core::models::{Day, DayKind, MessageTemplate, ScheduleDocument, Slot, TemplateRef};
use schedcast_core::normalize;

use crate::ScheduleStore;

/// Owns the in-memory document and its backing store.
///
/// This is the contract editing collaborators call into: slot add/delete
/// persist immediately (matching the editor's behavior), everything else
/// persists on an explicit [`save`](Self::save) or [`merge`](Self::merge).
pub struct ScheduleManager {
    store: ScheduleStore,
    document: ScheduleDocument,
}

impl ScheduleManager {
    /// Loads the document from `store`, falling back to defaults when the
    /// file is absent or unreadable.
    pub fn open(store: ScheduleStore) -> Self {
        let document = store.load();
        Self { store, document }
    }

    pub fn document(&self) -> &ScheduleDocument {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut ScheduleDocument {
        &mut self.document
    }

    pub fn save(&self) -> ScheduleResult<()> {
        self.store.save(&self.document)
    }

    /// Discards in-memory edits and re-reads the stored document.
    pub fn reload(&mut self) {
        self.document = self.store.load();
    }

    /// Appends a slot derived from the sequence's last entry and persists
    /// immediately. Returns the new slot.
    pub fn add_slot(&mut self, day: Day, kind: DayKind) -> ScheduleResult<Slot> {
        let slots = self.document.schedule.day_mut(day).slots_mut(kind);
        let slot = normalize::derive_next_slot(slots);
        slots.push(slot.clone());
        self.save()?;
        Ok(slot)
    }

    /// Removes the slot at `index`, refusing to empty the sequence: a day
    /// variant always keeps at least one slot.
    pub fn delete_slot(&mut self, day: Day, kind: DayKind, index: usize) -> ScheduleResult<()> {
        let slots = self.document.schedule.day_mut(day).slots_mut(kind);
        if index >= slots.len() {
            return Err(ScheduleError::Validation(format!(
                "slot index {index} out of range ({} slots)",
                slots.len()
            )));
        }
        if slots.len() == 1 {
            return Err(ScheduleError::Validation(
                "cannot delete the only remaining slot".to_string(),
            ));
        }
        slots.remove(index);
        self.save()
    }

    /// Shallow-merges `body`'s top-level keys into the document, replacing
    /// whole sub-trees, then re-normalizes and persists. Posting a partial
    /// `channel` object therefore drops the fields it omits; the renderer
    /// depends on this replace semantics.
    pub fn merge(&mut self, body: Value) -> ScheduleResult<&ScheduleDocument> {
        let Value::Object(patch) = body else {
            return Err(ScheduleError::MalformedDocument(
                "request body is not a JSON object".to_string(),
            ));
        };

        let mut raw = serde_json::to_value(&self.document)
            .map_err(|err| ScheduleError::Internal(eyre::eyre!(err)))?;
        let Some(root) = raw.as_object_mut() else {
            return Err(ScheduleError::Internal(eyre::eyre!(
                "serialized document is not an object"
            )));
        };
        for (key, value) in patch {
            root.insert(key, value);
        }

        self.document = normalize::normalize(raw)?;
        self.save()?;
        Ok(&self.document)
    }

    /// Resolves `reference` and renders the announcement message against
    /// the current document.
    pub fn compose_announcement<Tz: TimeZone>(
        &self,
        reference: &TemplateRef,
        now: DateTime<Tz>,
    ) -> ScheduleResult<String> {
        let template = compose::resolve_template(&self.document, reference)?;
        Ok(compose::compose(template, &self.document, now))
    }

    /// Adds a named template to the list and persists.
    pub fn add_template(&mut self, template: MessageTemplate) -> ScheduleResult<()> {
        if template.name.is_empty() {
            return Err(ScheduleError::Validation(
                "template name must not be empty".to_string(),
            ));
        }
        let templates = &mut self.document.discord.templates;
        if templates.iter().any(|existing| existing.name == template.name) {
            return Err(ScheduleError::Validation(format!(
                "a template named {:?} already exists",
                template.name
            )));
        }
        templates.push(template);
        self.save()
    }

    /// Replaces the template with the same name and persists.
    pub fn update_template(&mut self, template: MessageTemplate) -> ScheduleResult<()> {
        let templates = &mut self.document.discord.templates;
        let Some(slot) = templates
            .iter_mut()
            .find(|existing| existing.name == template.name)
        else {
            return Err(ScheduleError::TemplateNotFound(format!(
                "no template named {:?}",
                template.name
            )));
        };
        *slot = template;
        self.save()
    }

    /// Deletes a template by name, refusing to empty the list.
    pub fn delete_template(&mut self, name: &str) -> ScheduleResult<()> {
        let templates = &mut self.document.discord.templates;
        if !templates.iter().any(|template| template.name == name) {
            return Err(ScheduleError::TemplateNotFound(format!(
                "no template named {name:?}"
            )));
        }
        if templates.len() == 1 {
            return Err(ScheduleError::Validation(
                "cannot delete the only remaining template".to_string(),
            ));
        }
        templates.retain(|template| template.name != name);
        self.save()
    }
}
