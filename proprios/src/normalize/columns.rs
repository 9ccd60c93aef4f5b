//! Noms canoniques des colonnes du CSV de la Prefeitura do Recife
//!
//! La recherche est insensible à la casse, cf. [`crate::parser::Row::get`].

pub const INSCRICAO: &str = "inscricaoImobiliaria";
pub const SEQUENCIAL: &str = "sequencialImovel";
pub const LATITUDE: &str = "latitude";
pub const LONGITUDE: &str = "longitude";
pub const NOME_EDIFICACAO: &str = "nomeEdificacaoMultipla";
pub const TIPO_SIMPLES: &str = "tipoEmpreendimentoSimples";
pub const TIPO_MULTIPLA: &str = "tipoEmpreendimentoMultipla";
pub const LOGRADOURO: &str = "enderecoImovelNomeLogradouro";
pub const NUMERO: &str = "enderecoImovelNumero";
pub const BAIRRO: &str = "enderecoImovelBairro";
pub const MUNICIPIO: &str = "enderecoImovelMunicipio";
pub const ESTADO: &str = "enderecoImovelEstado";
pub const AREA_CONSTRUIDA_SIMPLES: &str = "areaTotalConstruidaSimples";
pub const AREA_CONSTRUIDA_MULTIPLA: &str = "areaTotalConstruidaMultipla";
pub const AREA_LOTE: &str = "areaLote";
pub const VALOR_VENAL: &str = "valorVenal";
pub const SITUACAO: &str = "situacao";
pub const PROPRIETARIO: &str = "proprietarioPrincipal";
pub const TOPOGRAFIA: &str = "topografiaLote";
pub const CONSERVACAO: &str = "estadoConservacaoSimples";
pub const REGIME_TRIBUTARIO: &str = "regimeTributacaoIPTU";
pub const ANO_CONSTRUCAO: &str = "anoConstrucaoMultipla";

/// Type d'empreendimento, par ordre de priorité
pub const DEVELOPMENT_TYPE: &[&str] = &[TIPO_SIMPLES, TIPO_MULTIPLA];

/// Surface construite, par ordre de priorité
pub const CONSTRUCTED_AREA: &[&str] = &[AREA_CONSTRUIDA_SIMPLES, AREA_CONSTRUIDA_MULTIPLA];

/// Composants de l'adresse, dans l'ordre d'affichage
pub const ADDRESS_PARTS: &[&str] = &[LOGRADOURO, NUMERO, BAIRRO, MUNICIPIO, ESTADO];
