use std::cell::{
    RefCell, RefMut
};
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;

use super::managererror::ManagerError;
use super::namedobject::NamedJsonObject;


/// Name-keyed registry of objects built from JSON.
pub trait IManager<V, S> where
    V: Clone {
    fn map(&self) -> RefMut<'_, HashMap<String, V>>;

    /// Builds a named object without registering it.
    fn obj_from_json(&self,
                     json_value: serde_json::Value,
                     supports: &S) -> Result<(String, V), ManagerError>;

    fn insert_obj_from_json(&self,
                            json_value: serde_json::Value,
                            supports: &S) -> Result<(), ManagerError> {
        let (name, v) = self.obj_from_json(json_value, supports)?;
        log::trace!("registered '{}'", name);
        self.map().insert(name, v);
        Ok(())
    }

    fn get(&self, name: &String) -> Result<V, ManagerError> {
        let map = self.map();
        map.get(name).cloned().ok_or_else(|| ManagerError::map_elem_not_found(name))
    }

    fn contains(&self, name: &String) -> bool {
        self.map().contains_key(name)
    }

    fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.map().keys().cloned().collect();
        names.sort();
        names
    }

    /// All or nothing: the map is untouched unless every object builds.
    fn insert_obj_from_json_vec(&self,
                                json_vec: &Vec<serde_json::Value>,
                                supports: &S) -> Result<(), ManagerError> {
        let objs = json_vec
            .iter()
            .map(|j| self.obj_from_json(j.clone(), supports))
            .collect::<Result<Vec<(String, V)>, ManagerError>>()?;
        let mut map = self.map();
        for (name, v) in objs {
            log::trace!("registered '{}'", name);
            map.insert(name, v);
        }
        Ok(())
    }

    /// Accepts either a single object or an array of objects.
    fn insert_from_json_value(&self,
                              json_value: serde_json::Value,
                              supports: &S) -> Result<(), ManagerError> {
        if json_value.is_array() {
            let json_array: Vec<serde_json::Value> = ManagerError::from_json_or_json_parse_error(json_value)?;
            self.insert_obj_from_json_vec(&json_array, supports)
        } else {
            self.insert_obj_from_json(json_value, supports)
        }
    }

    fn from_reader(&self,
                   file_path: String,
                   supports: &S) -> Result<(), ManagerError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_value: serde_json::Value = serde_json::from_reader(reader)?;
        self.insert_from_json_value(json_value, supports)
    }
}


pub struct Manager<V> {
    map_cell: RefCell<HashMap<String, V>>,
    get_obj_from_json: fn(serde_json::Value) -> Result<V, ManagerError>
}


impl <V> Manager<V> where
    V: Clone {
    pub fn new(get_obj_from_json: fn(serde_json::Value) -> Result<V, ManagerError>) -> Manager<V> {
        Manager {map_cell: RefCell::new(HashMap::new()), get_obj_from_json}
    }
}

impl <V> IManager<V, ()> for Manager<V> where
    V: Clone {
    fn map(&self) -> RefMut<'_, HashMap<String, V>> {
        self.map_cell.borrow_mut()
    }

    fn obj_from_json(&self,
                     json_value: serde_json::Value,
                     _supports: &()) -> Result<(String, V), ManagerError> {
        let named_object: NamedJsonObject = ManagerError::from_json_or_json_parse_error(json_value.clone())?;
        let v = (self.get_obj_from_json)(json_value)?;
        Ok((named_object.name().to_owned(), v))
    }
}
