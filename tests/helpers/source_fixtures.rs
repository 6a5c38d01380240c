//! Common MetaEd sources for tests.

/// Wrap declarations in a core `EdFi` namespace.
pub fn in_edfi(body: &str) -> String {
    format!("Begin Namespace EdFi core\n{body}\nEnd Namespace\n")
}

/// A domain entity with one property built from `property` (the first line is
/// the declaration, the rest its body).
pub fn entity_with_property(property: &str) -> String {
    in_edfi(&format!(
        "Domain Entity Holder\n    documentation \"holder\"\n    {property}\n"
    ))
}

pub const DUPLICATE_DOMAIN: &str = r#"Begin Namespace EdFi core
Domain D
    documentation "first"
    domain entity A
Domain D
    documentation "second"
    domain entity B
End Namespace
"#;

pub const ROLE_NAMED_PROPERTIES: &str = r#"Begin Namespace EdFi core
Association StudentTransfer
    documentation "A transfer."
    domain entity Student
        documentation "Student."
    domain entity School
        documentation "Source."
        role name Receiving
    domain entity School
        documentation "Target."
        is optional
        role name Sending shorten to Send
End Namespace
"#;

/// One of each declaration, in the same namespace.
pub const EVERY_DECLARATION: &str = r#"Begin Namespace EdFi core
Shared String Name
    documentation "A name."
    max length 75
Abstract Entity EducationOrganization
    documentation "An education organization."
    integer EducationOrganizationId
        documentation "Id."
        is part of identity
Domain Entity School based on EducationOrganization
    documentation "A school."
    shared string Name named NameOfInstitution
        documentation "Name."
        is required
Domain Entity Student
    documentation "A student."
    integer StudentUSI
        documentation "Id."
        is part of identity
    common Address
        documentation "Addresses."
        is optional collection
Common Address
    documentation "An address."
    string City
        documentation "City."
        is required
        max length 30
Association StudentSchoolAssociation
    documentation "Enrollment."
    domain entity Student
        documentation "Student."
    domain entity School
        documentation "School."
    date EntryDate
        documentation "Entry."
        is part of identity
Descriptor GradeLevel
    documentation "Grade level."
Enumeration Term
    documentation "Term."
    item "Fall"
    item "Spring"
Domain Enrollment
    documentation "Enrollment domain."
    domain entity Student
    association StudentSchoolAssociation
Subdomain Attendance of Enrollment
    documentation "Attendance subdomain."
    domain entity School
    position 1
Interchange StudentEnrollment
    documentation "Enrollment interchange."
    domain entity Student
    association StudentSchoolAssociation
    domain entity identity School
End Namespace
"#;
