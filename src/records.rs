// src/records.rs

use crate::model::SavedRecord;
use std::cell::RefCell;
use std::collections::HashMap;
#[cfg(not(target_arch = "wasm32"))]
use std::path::PathBuf;
use std::rc::Rc;
use thiserror::Error;

pub const STORAGE_KEY: &str = "friendship_quiz_records";

#[derive(Debug, Error)]
pub enum RecordStoreError {
    #[error("error de E/S en el almacenamiento: {0}")]
    Io(#[from] std::io::Error),
    #[error("no se pudieron serializar los registros: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("almacenamiento no disponible: {0}")]
    Unavailable(String),
}

/// Almacén clave → blob de texto. Cada `write` reemplaza el blob entero.
pub trait BlobStore {
    fn read(&self, key: &str) -> Result<Option<String>, RecordStoreError>;
    fn write(&mut self, key: &str, value: &str) -> Result<(), RecordStoreError>;
}

/// Un fichero JSON por clave dentro de `dir`.
#[cfg(not(target_arch = "wasm32"))]
pub struct FileBlobStore {
    dir: PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileBlobStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl BlobStore for FileBlobStore {
    fn read(&self, key: &str) -> Result<Option<String>, RecordStoreError> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), RecordStoreError> {
        std::fs::create_dir_all(&self.dir)?;
        let target = self.path_for(key);
        let tmp = self.dir.join(format!("{key}.json.tmp"));
        // Escribe aparte y renombra: el blob queda entero o como estaba
        std::fs::write(&tmp, value)?;
        std::fs::rename(&tmp, &target)?;
        Ok(())
    }
}

/// `window.localStorage` del navegador.
#[cfg(target_arch = "wasm32")]
pub struct LocalStorageBlobStore;

#[cfg(target_arch = "wasm32")]
impl LocalStorageBlobStore {
    fn storage() -> Result<web_sys::Storage, RecordStoreError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or_else(|| RecordStoreError::Unavailable("localStorage".into()))
    }
}

#[cfg(target_arch = "wasm32")]
impl BlobStore for LocalStorageBlobStore {
    fn read(&self, key: &str) -> Result<Option<String>, RecordStoreError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| RecordStoreError::Unavailable(format!("{e:?}")))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), RecordStoreError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| RecordStoreError::Unavailable(format!("{e:?}")))
    }
}

/// En memoria. Los clones comparten los mismos datos.
#[derive(Clone, Default)]
pub struct MemoryBlobStore {
    blobs: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.blobs.borrow().get(key).cloned()
    }
}

impl BlobStore for MemoryBlobStore {
    fn read(&self, key: &str) -> Result<Option<String>, RecordStoreError> {
        Ok(self.raw(key))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), RecordStoreError> {
        self.blobs
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Lista de intentos guardados, de más nuevo a más antiguo.
pub struct RecordStore {
    backend: Box<dyn BlobStore>,
    records: Vec<SavedRecord>,
}

impl RecordStore {
    pub fn open(backend: impl BlobStore + 'static) -> Self {
        let records = load_from(&backend);
        Self {
            backend: Box::new(backend),
            records,
        }
    }

    /// Vuelve a leer el blob. Si falta o no se puede parsear, lista vacía.
    pub fn load_all(&mut self) -> &[SavedRecord] {
        self.records = load_from(self.backend.as_ref());
        &self.records
    }

    pub fn records(&self) -> &[SavedRecord] {
        &self.records
    }

    /// Inserta al principio y persiste la lista completa.
    /// Devuelve el id con el que quedó guardado.
    pub fn append(&mut self, mut record: SavedRecord) -> Result<String, RecordStoreError> {
        record.id = self.unique_id(record.id);
        let id = record.id.clone();

        let mut updated = Vec::with_capacity(self.records.len() + 1);
        updated.push(record);
        updated.extend(self.records.iter().cloned());

        self.replace(updated)?;
        Ok(id)
    }

    /// Quita el registro con ese id. Un id desconocido no es un error.
    pub fn remove(&mut self, id: &str) -> Result<(), RecordStoreError> {
        if !self.records.iter().any(|r| r.id == id) {
            return Ok(());
        }
        let updated = self
            .records
            .iter()
            .filter(|r| r.id != id)
            .cloned()
            .collect();
        self.replace(updated)
    }

    // Solo se toca la lista en memoria si la escritura fue bien
    fn replace(&mut self, updated: Vec<SavedRecord>) -> Result<(), RecordStoreError> {
        let json = serde_json::to_string(&updated)?;
        self.backend.write(STORAGE_KEY, &json)?;
        self.records = updated;
        Ok(())
    }

    fn unique_id(&self, id: String) -> String {
        if !self.records.iter().any(|r| r.id == id) {
            return id;
        }
        let mut n = 1;
        loop {
            let candidate = match id.parse::<u64>() {
                Ok(millis) => (millis + n).to_string(),
                Err(_) => format!("{id}-{n}"),
            };
            if !self.records.iter().any(|r| r.id == candidate) {
                return candidate;
            }
            n += 1;
        }
    }
}

fn load_from(backend: &dyn BlobStore) -> Vec<SavedRecord> {
    let raw = match backend.read(STORAGE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            log::warn!("No se pudieron leer los registros guardados: {e}");
            return Vec::new();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(records) => records,
        Err(e) => {
            log::warn!("Registros guardados corruptos, se ignoran: {e}");
            Vec::new()
        }
    }
}
