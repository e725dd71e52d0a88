// ============================================================================
// CAPTCHA ARITMÉTICO - Reto del formulario de login
// ============================================================================

use std::fmt;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CaptchaOp {
    Suma,
    Resta,
}

impl fmt::Display for CaptchaOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptchaOp::Suma => write!(f, "+"),
            CaptchaOp::Resta => write!(f, "-"),
        }
    }
}

/// Reto de dos operandos con resultado garantizado no negativo.
/// Se regenera en cada intento fallido o a petición del usuario.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CaptchaChallenge {
    a: u8,
    b: u8,
    op: CaptchaOp,
}

impl CaptchaChallenge {
    /// Construye el reto normalizando la resta: el operando mayor siempre
    /// va primero para que el resultado no sea negativo.
    pub fn from_operands(a: u8, b: u8, op: CaptchaOp) -> Self {
        let (a, b) = match op {
            CaptchaOp::Resta if b > a => (b, a),
            _ => (a, b),
        };
        Self { a, b, op }
    }

    /// Reto aleatorio con operandos de uno o dos dígitos (RNG del navegador)
    pub fn generate() -> Self {
        let a = random_in_range(2, 19);
        let b = random_in_range(1, 9);
        let op = if js_sys::Math::random() < 0.5 {
            CaptchaOp::Suma
        } else {
            CaptchaOp::Resta
        };
        Self::from_operands(a, b, op)
    }

    pub fn question(&self) -> String {
        format!("¿Cuánto es {} {} {}?", self.a, self.op, self.b)
    }

    pub fn expected(&self) -> u8 {
        match self.op {
            CaptchaOp::Suma => self.a + self.b,
            CaptchaOp::Resta => self.a - self.b,
        }
    }

    /// Valida la respuesta capturada; entrada vacía o no numérica falla
    pub fn check(&self, input: &str) -> bool {
        input
            .trim()
            .parse::<u8>()
            .map(|answer| answer == self.expected())
            .unwrap_or(false)
    }
}

fn random_in_range(min: u8, max: u8) -> u8 {
    let span = (max - min + 1) as f64;
    min + (js_sys::Math::random() * span) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn la_resta_se_normaliza_a_resultado_no_negativo() {
        let reto = CaptchaChallenge::from_operands(3, 17, CaptchaOp::Resta);
        assert_eq!(reto.expected(), 14);
        assert_eq!(reto.question(), "¿Cuánto es 17 - 3?");
    }

    #[test]
    fn la_suma_conserva_el_orden_de_operandos() {
        let reto = CaptchaChallenge::from_operands(4, 9, CaptchaOp::Suma);
        assert_eq!(reto.expected(), 13);
        assert_eq!(reto.question(), "¿Cuánto es 4 + 9?");
    }

    #[test]
    fn check_acepta_espacios_y_rechaza_basura() {
        let reto = CaptchaChallenge::from_operands(12, 5, CaptchaOp::Suma);
        assert!(reto.check("17"));
        assert!(reto.check("  17 "));
        assert!(!reto.check("16"));
        assert!(!reto.check(""));
        assert!(!reto.check("diecisiete"));
        assert!(!reto.check("-17"));
    }
}
