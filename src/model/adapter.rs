// File: ./src/model/adapter.rs
//
// Converts task records into the property map the external task store
// consumes. Absent optional fields are omitted entirely, never sent as
// null. Instants are formatted as ISO-8601 with the fixed-zone offset.
use crate::model::record::TaskRecord;
use serde_json::{Map, Value, json};

pub fn to_store_properties(record: &TaskRecord) -> Value {
    let mut props = Map::new();

    props.insert(
        "Nombre".to_string(),
        json!({ "title": [{ "text": { "content": record.title } }] }),
    );
    props.insert(
        "Prioridad".to_string(),
        json!({ "select": { "name": record.priority.store_name() } }),
    );
    props.insert(
        "Estado".to_string(),
        json!({ "status": { "name": record.status.store_name() } }),
    );
    props.insert(
        "Base del Registro".to_string(),
        json!({ "select": { "name": record.reminder_lead.store_name() } }),
    );

    if let Some(dt) = record.task_moment {
        props.insert(
            "Fecha/Hora de Tarea".to_string(),
            json!({ "date": { "start": dt.to_rfc3339() } }),
        );
    }
    if let Some(dt) = record.reminder_moment {
        props.insert(
            "Fecha de Recordatorio".to_string(),
            json!({ "date": { "start": dt.to_rfc3339() } }),
        );
    }
    if let Some(label) = &record.list_label {
        props.insert("Lista".to_string(), json!({ "select": { "name": label } }));
    }

    Value::Object(props)
}
