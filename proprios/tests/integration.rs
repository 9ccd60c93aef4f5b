//! Tests d'intégration sur un extrait réaliste du CSV des próprios

use proprios::spatial::{find_nearest, find_within_radius, NEAREST_THRESHOLD_DEG, KM_PER_DEGREE};
use proprios::{ParcelStatus, ParcelType};

const SAMPLE: &str = "\
inscricaoImobiliaria;sequencialImovel;latitude;longitude;nomeEdificacaoMultipla;tipoEmpreendimentoSimples;tipoEmpreendimentoMultipla;enderecoImovelNomeLogradouro;enderecoImovelNumero;enderecoImovelBairro;enderecoImovelMunicipio;enderecoImovelEstado;areaTotalConstruidaSimples;areaTotalConstruidaMultipla;areaLote;valorVenal;situacao;topografiaLote;estadoConservacaoSimples;regimeTributacaoIPTU;anoConstrucaoMultipla
1.0001.023.04.0120.0000-1;101;-8.0631;-34.8711;Mercado de São José;;Edificacao comercial;Praça Dom Vital;S/N;São José;Recife;PE;;3541.2;4100;2500000;Ativo;Plana;Regular;Imune;1875
;102;-8.0612;-34.8760;;Casa;;\"Rua do Bom Jesus; trecho 2\";125;Bairro do Recife - Centro;Recife;PE;180;;200;;Alienado;;Bom;;
1.0001.023.04.0130.0000-2;103;0;0;;Galpao;;Cais do Porto;;Bairro do Recife;Recife;PE;900;;1000;;ativo;;;;
1.0001.023.04.0140.0000-3;104;-8.0650;-34.8790
;;-8.0660;-34.8800;;;;;;;;;;;;;;;;;
";

#[test]
fn test_parse_sample() {
    let result = proprios::parse(SAMPLE.as_bytes()).unwrap();

    let ids: Vec<_> = result.records.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["1.0001.023.04.0120.0000-1", "102", "recife_2"]);
    assert_eq!(result.stats.rows_read, 5);
    assert_eq!(result.stats.malformed_rows, 1);
    assert_eq!(result.stats.rows_without_coordinates, 1);

    let mercado = &result.records[0];
    assert_eq!(mercado.name, "Mercado de São José");
    assert_eq!(mercado.parcel_type, ParcelType::Commercial);
    assert_eq!(mercado.status, ParcelStatus::Active);
    assert_eq!(mercado.area, 3541.2);
    assert_eq!(mercado.images.len(), 2);
    assert!(mercado.features.contains(&"Ano construção: 1875".to_string()));

    let casa = &result.records[1];
    assert_eq!(casa.name, "Casa - Rua do Bom Jesus; trecho 2");
    assert_eq!(casa.parcel_type, ParcelType::Residential);
    assert_eq!(casa.status, ParcelStatus::Disposed);
    assert_eq!(casa.price, None);
    assert!(casa.features.contains(&"Centro Histórico".to_string()));

    let bare = &result.records[2];
    assert_eq!(bare.name, "Imóvel Municipal");
    assert_eq!(bare.parcel_type, ParcelType::Public);
    assert_eq!(bare.status, ParcelStatus::Inactive);
}

#[test]
fn test_lookup_over_parsed_sample() {
    let result = proprios::parse(SAMPLE.as_bytes()).unwrap();

    let (found, _) = find_nearest(&result.records, -34.8712, -8.0632).unwrap();
    assert_eq!(found.id, "1.0001.023.04.0120.0000-1");
    assert!(find_nearest(&result.records, 0.0, 0.0).is_none());

    let radius_km = NEAREST_THRESHOLD_DEG * KM_PER_DEGREE;
    let within = find_within_radius(&result.records, -34.8712, -8.0632, radius_km);
    assert!(within.iter().any(|r| r.id == found.id));
}

#[test]
fn test_records_serialize_like_the_ui_expects() {
    let result = proprios::parse(SAMPLE.as_bytes()).unwrap();
    let json = serde_json::to_value(&result.records[0]).unwrap();

    assert_eq!(json["type"], "commercial");
    assert_eq!(json["status"], "active");
    assert_eq!(json["coordinates"][0], -34.8711);
    assert_eq!(json["coordinates"][1], -8.0631);
    assert_eq!(json["price"], 2500000.0);
}
