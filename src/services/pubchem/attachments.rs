use crate::kernel::intent::types::AttachmentDescriptor;

pub const ATTACHMENT_SDF_TITLE: &str = "Download SDF";
pub const ATTACHMENT_STRUCTURE_TITLE: &str = "Chemical Structure";
pub const ATTACHMENT_REFERENCE_TITLE: &str = "PubChem Reference";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachmentKind {
    Structure,
    Sdf,
    ReferenceLink,
}

impl AttachmentKind {
    /// `none`, empty and unknown tokens ask for nothing.
    pub fn parse(token: &str) -> Option<Self> {
        match token.trim().to_lowercase().as_str() {
            "structure" => Some(AttachmentKind::Structure),
            "sdf" => Some(AttachmentKind::Sdf),
            "reference-link" | "reference" | "pubchemlink" => Some(AttachmentKind::ReferenceLink),
            _ => None,
        }
    }
}

pub struct AttachmentResolver {
    domain: String,
}

impl AttachmentResolver {
    /// `domain` is the public site root with a trailing slash.
    pub fn new(domain: &str) -> Self {
        Self { domain: domain.to_string() }
    }

    /// Attachments for a resolved compound. Bundles always get structure and
    /// SDF; otherwise the requested kind. The record link always comes last,
    /// exactly once. Nothing is produced without a compound id.
    pub fn resolve(&self, compound_id: &str, requested: Option<&str>, bundle: bool) -> Vec<AttachmentDescriptor> {
        if compound_id.is_empty() {
            return Vec::new();
        }

        let kinds: Vec<AttachmentKind> = if bundle {
            vec![AttachmentKind::Structure, AttachmentKind::Sdf]
        } else {
            requested.and_then(AttachmentKind::parse).into_iter().collect()
        };

        let mut attachments: Vec<AttachmentDescriptor> = kinds
            .into_iter()
            .filter(|k| *k != AttachmentKind::ReferenceLink)
            .map(|k| self.descriptor(compound_id, k))
            .collect();
        attachments.push(self.descriptor(compound_id, AttachmentKind::ReferenceLink));
        attachments
    }

    fn descriptor(&self, compound_id: &str, kind: AttachmentKind) -> AttachmentDescriptor {
        let rest_base = format!("{}rest/pug/compound/cid/{}/", self.domain, compound_id);
        match kind {
            AttachmentKind::Structure => {
                AttachmentDescriptor::image(ATTACHMENT_STRUCTURE_TITLE, format!("{}PNG", rest_base))
            }
            AttachmentKind::Sdf => AttachmentDescriptor::file(ATTACHMENT_SDF_TITLE, format!("{}SDF", rest_base)),
            AttachmentKind::ReferenceLink => AttachmentDescriptor::file(
                ATTACHMENT_REFERENCE_TITLE,
                format!("{}compound/{}", self.domain, compound_id),
            ),
        }
    }
}
