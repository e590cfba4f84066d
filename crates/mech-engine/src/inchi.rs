//! Operaciones sobre las capas estereoquímicas de identificadores InChI.
//!
//! - `/b`: dobles enlaces (cis/trans)
//! - `/t`: centros tetraédricos (paridades relativas)
//! - `/m`: inversión (`m0` tal cual, `m1` invertido respecto a `/t`)
//! - `/s`: tipo de estereo (`s1` absoluto, `s2` relativo, `s3` racémico)
//!
//! Un identificador sin capas (sin `/`) se trata como libre de estereo.
use mech_domain::identifier::is_stereo_layer;
use mech_domain::Identifier;

/// Forma estándar sin estereoquímica: conserva la conectividad.
pub fn stereo_free(identifier: &Identifier) -> Identifier {
    identifier.map_layers(|layer| (!is_stereo_layer(layer)).then(|| layer.to_string()))
}

/// Imagen especular: invierte todos los estereocentros tetraédricos. Los
/// dobles enlaces no cambian; el estereo relativo o racémico es su propia
/// imagen.
pub fn mirror_image(identifier: &Identifier) -> Identifier {
    if identifier.layers().any(|l| l == "s2" || l == "s3") {
        return identifier.clone();
    }
    identifier.map_layers(|layer| match layer {
                  "m0" => Some("m1".to_string()),
                  "m1" => Some("m0".to_string()),
                  other => Some(other.to_string()),
              })
}

/// `true` si alguna paridad de `/b` o `/t` está sin asignar (`?`).
pub fn has_undefined_stereo(identifier: &Identifier) -> bool {
    identifier.layers()
              .any(|l| (l.starts_with('b') || l.starts_with('t')) && l.contains('?'))
}
