/// Entity kinds the lifecycle manager can transition between active and
/// soft-deleted state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Class,
    Parent,
    Student,
}

/// Column/table names involved when a parent or class cascades onto its
/// students: the foreign key pointing at the record being transitioned, and
/// the student's other dependency that must be re-checked on restore.
#[derive(Debug, Clone, Copy)]
pub struct CascadeRefs {
    pub own_fk: &'static str,
    pub other_fk: &'static str,
    pub other_table: &'static str,
}

impl EntityKind {
    pub fn table(&self) -> &'static str {
        match self {
            EntityKind::Class => "classes",
            EntityKind::Parent => "parents",
            EntityKind::Student => "students",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::Class => "Class",
            EntityKind::Parent => "Parent",
            EntityKind::Student => "Student",
        }
    }

    /// `None` for students, which have no dependents of their own.
    pub fn cascade_refs(&self) -> Option<CascadeRefs> {
        match self {
            EntityKind::Class => Some(CascadeRefs {
                own_fk: "class_id",
                other_fk: "parent_id",
                other_table: "parents",
            }),
            EntityKind::Parent => Some(CascadeRefs {
                own_fk: "parent_id",
                other_fk: "class_id",
                other_table: "classes",
            }),
            EntityKind::Student => None,
        }
    }
}
