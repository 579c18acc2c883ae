use chrono::{DateTime, NaiveDate};

/// Formatea una fecha ISO-8601 de la API como dd/MM/yyyy.
/// Si el valor no se puede interpretar, se muestra tal cual.
pub fn formatear_fecha(valor: &str) -> String {
    if let Ok(fecha) = DateTime::parse_from_rfc3339(valor) {
        return fecha.format("%d/%m/%Y").to_string();
    }

    // La API a veces entrega solo la parte de fecha
    let solo_fecha = valor.get(..10).unwrap_or(valor);
    if let Ok(fecha) = NaiveDate::parse_from_str(solo_fecha, "%Y-%m-%d") {
        return fecha.format("%d/%m/%Y").to_string();
    }

    valor.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formatea_fecha_con_hora() {
        assert_eq!(formatear_fecha("2024-11-05T14:30:00Z"), "05/11/2024");
    }

    #[test]
    fn formatea_fecha_sin_hora() {
        assert_eq!(formatear_fecha("2024-01-31"), "31/01/2024");
    }

    #[test]
    fn valor_ilegible_se_muestra_tal_cual() {
        assert_eq!(formatear_fecha("pendiente"), "pendiente");
        assert_eq!(formatear_fecha(""), "");
    }
}
