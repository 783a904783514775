//! Word lists the fake values are drawn from.

pub const FIRST_NAMES: &[&str] = &[
    "Ana", "Bruno", "Carla", "Daniel", "Eduarda", "Felipe", "Gabriela", "Henrique", "Isabela",
    "João", "Larissa", "Lucas", "Mariana", "Mateus", "Natália", "Otávio", "Paula", "Rafael",
    "Sofia", "Thiago", "Vanessa", "Vinícius", "Yasmin", "Rodrigo", "Camila", "Gustavo",
];

pub const LAST_NAMES: &[&str] = &[
    "Silva", "Santos", "Oliveira", "Souza", "Rodrigues", "Ferreira", "Alves", "Pereira", "Lima",
    "Gomes", "Costa", "Ribeiro", "Martins", "Carvalho", "Almeida", "Lopes", "Soares", "Fernandes",
    "Vieira", "Barbosa", "Rocha", "Dias", "Nascimento", "Andrade", "Moreira", "Nunes",
];

pub const EMAIL_PROVIDERS: &[&str] = &["gmail.com", "hotmail.com", "yahoo.com", "outlook.com"];

pub const DEPARTMENTS: &[&str] = &[
    "Qualidade", "Segurança do Trabalho", "Saúde Ocupacional", "Meio Ambiente", "Operações",
    "Manutenção", "Engenharia", "Recursos Humanos", "Jurídico", "Compliance", "Logística",
];

pub const COMPANY_SUFFIXES: &[&str] = &["Ltda.", "S.A.", "EIRELI", "ME", "e Filhos"];

pub const STREET_SUFFIXES: &[&str] = &["Rua", "Avenida", "Travessa", "Alameda", "Rodovia"];

pub const CITIES: &[&str] = &[
    "São Paulo", "Rio de Janeiro", "Belo Horizonte", "Curitiba", "Porto Alegre", "Salvador",
    "Recife", "Fortaleza", "Campinas", "Manaus",
];

pub const PHONE_FORMATS: &[&str] = &[
    "(##) ####-####",
    "(##) 9####-####",
    "+55 ## ####-####",
    "+55 ## 9####-####",
];

pub const JOB_DESCRIPTORS: &[&str] = &["Técnico", "Auxiliar", "Assistente", "Analista", "Supervisor", "Operador"];

pub const JOB_AREAS: &[&str] = &[
    "de Produção", "de Manutenção", "de Segurança", "Eletricista", "de Empilhadeira",
    "de Caldeira", "de Almoxarifado", "de Obras", "de Campo", "de Logística",
];

pub const LOREM: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna", "aliqua", "enim",
    "ad", "minim", "veniam", "quis", "nostrud", "exercitation", "ullamco", "laboris", "nisi",
    "aliquip", "ex", "ea", "commodo", "consequat", "duis", "aute", "irure", "voluptate",
];
