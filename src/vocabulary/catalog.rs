//! Built-in domain catalog
//!
//! Core ES/EN vocabulary for the six supported application domains, the
//! global support table consulted as a last-resort source of generic tables,
//! and the per-language enrichment vocabulary. This is pure data; shape
//! invariants are checked by [`store::VocabularyStore::new`](super::store).

use super::{entity_map, Domain, EntityMap, LanguageMap, RelationTemplate};

/// All built-in domains, in catalog order
pub fn domains() -> Vec<Domain> {
    vec![
        ecommerce(),
        health(),
        education(),
        finance(),
        logistics(),
        crm(),
    ]
}

/// Generic cross-domain tables (city, employee, position, ...)
pub fn global_support() -> LanguageMap<EntityMap> {
    LanguageMap::new(
        entity_map(&[
            ("ciudad", &["id", "nombre"]),
            ("empleado", &["id", "nombre", "puesto_id"]),
            ("puesto", &["id", "nombre"]),
            ("categoria", &["id", "nombre"]),
            ("proveedor", &["id", "nombre", "telefono"]),
            ("producto", &["id", "nombre", "precio"]),
            ("usuario", &["id", "nombre", "email"]),
            ("cliente", &["id", "nombre", "email"]),
        ]),
        entity_map(&[
            ("city", &["id", "name"]),
            ("employee", &["id", "name", "position_id"]),
            ("position", &["id", "name"]),
            ("category", &["id", "name"]),
            ("supplier", &["id", "name", "phone"]),
            ("product", &["id", "name", "price"]),
            ("user", &["id", "name", "email"]),
            ("customer", &["id", "name", "email"]),
        ]),
    )
}

/// Generic attributes used to optionally enrich synthesized outputs
pub fn enrichment_vocabulary() -> LanguageMap<Vec<String>> {
    let to_vec = |attrs: &[&str]| attrs.iter().map(|a| a.to_string()).collect();
    LanguageMap::new(
        to_vec(&["created_at", "updated_at", "activo", "nota", "observaciones"]),
        to_vec(&["created_at", "updated_at", "active", "note", "remarks"]),
    )
}

fn ecommerce() -> Domain {
    Domain {
        key: "ecommerce".to_string(),
        entities: LanguageMap::new(
            entity_map(&[
                (
                    "cliente",
                    &["id", "nombre", "email", "telefono", "direccion", "fecha_registro"],
                ),
                (
                    "producto",
                    &["id", "nombre", "descripcion", "precio", "stock", "categoria_id", "proveedor_id"],
                ),
                ("categoria", &["id", "nombre", "descripcion"]),
                ("proveedor", &["id", "nombre", "telefono", "email"]),
                ("orden", &["id", "fecha", "cliente_id", "total", "estado"]),
                ("pago", &["id", "orden_id", "monto", "fecha", "metodo", "estado"]),
                ("carrito", &["id", "cliente_id", "fecha_creacion", "estado", "total"]),
                ("carrito_item", &["id", "carrito_id", "producto_id", "cantidad", "precio"]),
            ]),
            entity_map(&[
                ("customer", &["id", "name", "email", "phone", "address", "register_date"]),
                (
                    "product",
                    &["id", "name", "description", "price", "stock", "category_id", "supplier_id"],
                ),
                ("category", &["id", "name", "description"]),
                ("supplier", &["id", "name", "phone", "email"]),
                ("order", &["id", "date", "customer_id", "total", "status"]),
                ("payment", &["id", "order_id", "amount", "date", "method", "status"]),
                ("cart", &["id", "customer_id", "created_at", "status", "total"]),
                ("cart_item", &["id", "cart_id", "product_id", "quantity", "price"]),
            ]),
        ),
        relations: LanguageMap::new(
            vec![
                RelationTemplate::new(
                    "comentario",
                    &["id", "texto", "fecha", "usuario_id", "proyecto_id"],
                    ("usuario", "proyecto"),
                ),
                RelationTemplate::new(
                    "venta",
                    &["id", "fecha", "cliente_id", "total"],
                    ("cliente", "producto"),
                ),
                RelationTemplate::new(
                    "movimiento_inventario",
                    &["id", "producto_id", "cantidad", "tipo", "fecha", "inventario_id"],
                    ("producto", "inventario"),
                ),
                RelationTemplate::new(
                    "pedido_item",
                    &["id", "orden_id", "producto_id", "cantidad", "precio"],
                    ("orden", "producto"),
                ),
            ],
            vec![
                RelationTemplate::new(
                    "comment",
                    &["id", "text", "date", "user_id", "project_id"],
                    ("user", "project"),
                ),
                RelationTemplate::new(
                    "sale",
                    &["id", "date", "customer_id", "total"],
                    ("customer", "product"),
                ),
                RelationTemplate::new(
                    "inventory_movement",
                    &["id", "product_id", "quantity", "type", "date", "inventory_id"],
                    ("product", "inventory"),
                ),
                RelationTemplate::new(
                    "order_item",
                    &["id", "order_id", "product_id", "quantity", "price"],
                    ("order", "product"),
                ),
            ],
        ),
        support: LanguageMap::new(
            entity_map(&[(
                "inventario",
                &["id", "producto_id", "cantidad", "ubicacion", "fecha_ingreso", "proveedor_id"],
            )]),
            entity_map(&[(
                "inventory",
                &["id", "product_id", "quantity", "location", "entry_date", "supplier_id"],
            )]),
        ),
    }
}

fn health() -> Domain {
    Domain {
        key: "health".to_string(),
        entities: LanguageMap::new(
            entity_map(&[
                (
                    "paciente",
                    &["id", "nombre", "fecha_nacimiento", "telefono", "direccion", "email", "historial_medico"],
                ),
                ("doctor", &["id", "nombre", "especialidad", "telefono", "email"]),
                ("cita", &["id", "fecha", "doctor_id", "paciente_id", "motivo"]),
                (
                    "prescripcion",
                    &["id", "paciente_id", "medico_id", "medicamento", "dosis", "frecuencia", "inicio", "fin"],
                ),
                (
                    "resultado_laboratorio",
                    &["id", "paciente_id", "prueba", "valor", "unidad", "fecha"],
                ),
            ]),
            entity_map(&[
                (
                    "patient",
                    &["id", "name", "birth_date", "phone", "address", "email", "medical_history"],
                ),
                ("doctor", &["id", "name", "specialty", "phone", "email"]),
                ("appointment", &["id", "date", "doctor_id", "patient_id", "reason"]),
                (
                    "prescription",
                    &["id", "patient_id", "doctor_id", "medication", "dose", "frequency", "start_date", "end_date"],
                ),
                ("lab_result", &["id", "patient_id", "test", "value", "unit", "date"]),
            ]),
        ),
        relations: LanguageMap::new(
            vec![RelationTemplate::new(
                "derivacion",
                &["id", "paciente_id", "doctor_origen_id", "doctor_destino_id", "motivo", "fecha"],
                ("paciente", "doctor"),
            )],
            vec![RelationTemplate::new(
                "referral",
                &["id", "patient_id", "from_doctor_id", "to_doctor_id", "reason", "date"],
                ("patient", "doctor"),
            )],
        ),
        support: LanguageMap::default(),
    }
}

fn education() -> Domain {
    Domain {
        key: "education".to_string(),
        entities: LanguageMap::new(
            entity_map(&[
                ("alumno", &["id", "nombre", "email", "fecha_nacimiento", "curso_id"]),
                ("curso", &["id", "nombre", "descripcion", "creditos"]),
                ("profesor", &["id", "nombre", "email", "departamento_id"]),
                ("departamento", &["id", "nombre"]),
                ("calificacion", &["id", "alumno_id", "curso_id", "nota", "fecha"]),
            ]),
            entity_map(&[
                ("student", &["id", "name", "email", "birth_date", "course_id"]),
                ("course", &["id", "name", "description", "credits"]),
                ("teacher", &["id", "name", "email", "department_id"]),
                ("department", &["id", "name"]),
                ("grade", &["id", "student_id", "course_id", "score", "date"]),
            ]),
        ),
        relations: LanguageMap::new(
            vec![RelationTemplate::new(
                "matricula",
                &["id", "alumno_id", "curso_id", "fecha"],
                ("alumno", "curso"),
            )],
            vec![RelationTemplate::new(
                "enrollment",
                &["id", "student_id", "course_id", "date"],
                ("student", "course"),
            )],
        ),
        support: LanguageMap::default(),
    }
}

fn finance() -> Domain {
    Domain {
        key: "finance".to_string(),
        entities: LanguageMap::new(
            entity_map(&[
                (
                    "cuenta_bancaria",
                    &["id", "numero_cuenta", "saldo", "fecha_apertura", "cliente_id"],
                ),
                (
                    "transaccion",
                    &["id", "fecha", "monto", "tipo", "cuenta_id", "cliente_id"],
                ),
                (
                    "estado_cuenta",
                    &["id", "cuenta_id", "periodo", "saldo_inicial", "saldo_final"],
                ),
            ]),
            entity_map(&[
                (
                    "bank_account",
                    &["id", "account_number", "balance", "open_date", "customer_id"],
                ),
                (
                    "transaction",
                    &["id", "date", "amount", "type", "account_id", "customer_id"],
                ),
                (
                    "account_statement",
                    &["id", "account_id", "period", "opening_balance", "closing_balance"],
                ),
            ]),
        ),
        // No predefined relations: Type B synthesis falls back to pairing
        // two entities (see corpus::synthesizer).
        relations: LanguageMap::default(),
        support: LanguageMap::default(),
    }
}

fn logistics() -> Domain {
    Domain {
        key: "logistics".to_string(),
        entities: LanguageMap::new(
            entity_map(&[
                (
                    "envio",
                    &["id", "fecha_envio", "direccion_destino", "cliente_id", "estado"],
                ),
                ("bulto", &["id", "envio_id", "peso", "dimensiones", "codigo_tracking"]),
                (
                    "sucursal",
                    &["id", "nombre", "direccion", "ciudad_id", "telefono", "gerente_id"],
                ),
                (
                    "inventario",
                    &["id", "producto_id", "cantidad", "ubicacion", "fecha_ingreso", "proveedor_id"],
                ),
            ]),
            entity_map(&[
                (
                    "shipment",
                    &["id", "ship_date", "destination_address", "customer_id", "status"],
                ),
                (
                    "tracking_package",
                    &["id", "shipment_id", "weight", "dimensions", "tracking_code"],
                ),
                (
                    "branch",
                    &["id", "name", "address", "city_id", "phone", "manager_id"],
                ),
                (
                    "inventory",
                    &["id", "product_id", "quantity", "location", "entry_date", "supplier_id"],
                ),
            ]),
        ),
        relations: LanguageMap::new(
            vec![RelationTemplate::new(
                "ruta",
                &["id", "sucursal_origen_id", "sucursal_destino_id", "distancia"],
                ("sucursal", "sucursal"),
            )],
            vec![RelationTemplate::new(
                "route",
                &["id", "branch_from_id", "branch_to_id", "distance"],
                ("branch", "branch"),
            )],
        ),
        support: LanguageMap::default(),
    }
}

fn crm() -> Domain {
    Domain {
        key: "crm".to_string(),
        entities: LanguageMap::new(
            entity_map(&[
                ("usuario", &["id", "nombre", "email", "fecha_registro"]),
                ("proyecto", &["id", "nombre", "fecha"]),
                ("lead", &["id", "nombre", "email", "telefono", "source", "created_at"]),
                (
                    "oportunidad",
                    &["id", "account_id", "monto", "probabilidad", "etapa", "fecha_cierre"],
                ),
                ("cuenta", &["id", "nombre", "telefono", "email"]),
            ]),
            entity_map(&[
                ("user", &["id", "name", "email", "register_date"]),
                ("project", &["id", "name", "date"]),
                ("lead", &["id", "name", "email", "phone", "source", "created_at"]),
                (
                    "opportunity",
                    &["id", "account_id", "amount", "probability", "stage", "close_date"],
                ),
                ("account", &["id", "name", "phone", "email"]),
            ]),
        ),
        relations: LanguageMap::new(
            vec![RelationTemplate::new(
                "comentario",
                &["id", "texto", "fecha", "usuario_id", "proyecto_id"],
                ("usuario", "proyecto"),
            )],
            vec![RelationTemplate::new(
                "comment",
                &["id", "text", "date", "user_id", "project_id"],
                ("user", "project"),
            )],
        ),
        support: LanguageMap::default(),
    }
}
